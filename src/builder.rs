use std::fmt;
use std::mem;

// =============================================================================
// Builder: a director drives interchangeable builders through a fixed
// two-step build sequence; each builder assembles its own part list.
// =============================================================================

/// Ordered, append-only list of part names assembled by a builder.
///
/// Parts keep their insertion order and are never removed or rewritten; the
/// only mutation is appending via [`Product::add`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product Parts -------")?;
        for part in &self.parts {
            writeln!(f, "{part}")?;
        }
        Ok(())
    }
}

/// The build steps a director can drive, plus retrieval of the result.
pub trait Builder {
    fn build_part_a(&mut self);
    fn build_part_b(&mut self);

    /// Hands over the assembled product, leaving the builder empty so it can
    /// be driven through another construction.
    fn finish(&mut self) -> Product;
}

/// Builds the `PartA`/`PartB` product.
#[derive(Debug, Default)]
pub struct ConcreteBuilder1 {
    product: Product,
}

impl Builder for ConcreteBuilder1 {
    fn build_part_a(&mut self) {
        self.product.add("PartA");
    }

    fn build_part_b(&mut self) {
        self.product.add("PartB");
    }

    fn finish(&mut self) -> Product {
        mem::take(&mut self.product)
    }
}

/// Builds the `PartX`/`PartY` product.
#[derive(Debug, Default)]
pub struct ConcreteBuilder2 {
    product: Product,
}

impl Builder for ConcreteBuilder2 {
    fn build_part_a(&mut self) {
        self.product.add("PartX");
    }

    fn build_part_b(&mut self) {
        self.product.add("PartY");
    }

    fn finish(&mut self) -> Product {
        mem::take(&mut self.product)
    }
}

/// Knows the build sequence; works against any [`Builder`].
#[derive(Debug, Default)]
pub struct Director;

impl Director {
    /// Runs the fixed sequence: part A, then part B, exactly once each.
    pub fn construct(&self, builder: &mut dyn Builder) {
        builder.build_part_a();
        builder.build_part_b();
    }
}

/// Constructs both products via one director and narrates the result.
pub fn demo() -> String {
    let director = Director;
    let mut out = String::new();

    let mut builder1 = ConcreteBuilder1::default();
    director.construct(&mut builder1);
    out.push('\n');
    out.push_str(&builder1.finish().to_string());

    let mut builder2 = ConcreteBuilder2::default();
    director.construct(&mut builder2);
    out.push('\n');
    out.push_str(&builder2.finish().to_string());

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder1_parts_in_order() {
        let director = Director;
        let mut builder = ConcreteBuilder1::default();
        director.construct(&mut builder);
        assert_eq!(builder.finish().parts(), ["PartA", "PartB"]);
    }

    #[test]
    fn test_builder2_parts_in_order() {
        let director = Director;
        let mut builder = ConcreteBuilder2::default();
        director.construct(&mut builder);
        assert_eq!(builder.finish().parts(), ["PartX", "PartY"]);
    }

    #[test]
    fn test_director_runs_steps_in_order_once() {
        #[derive(Default)]
        struct RecordingBuilder {
            calls: Vec<&'static str>,
        }

        impl Builder for RecordingBuilder {
            fn build_part_a(&mut self) {
                self.calls.push("a");
            }

            fn build_part_b(&mut self) {
                self.calls.push("b");
            }

            fn finish(&mut self) -> Product {
                Product::default()
            }
        }

        let director = Director;
        let mut builder = RecordingBuilder::default();
        director.construct(&mut builder);
        assert_eq!(builder.calls, ["a", "b"]);
    }

    #[test]
    fn test_builder_reusable_after_finish() {
        let director = Director;
        let mut builder = ConcreteBuilder1::default();

        director.construct(&mut builder);
        let first = builder.finish();

        director.construct(&mut builder);
        let second = builder.finish();

        assert_eq!(first, second);
        assert_eq!(second.parts(), ["PartA", "PartB"]);
    }

    #[test]
    fn test_product_display() {
        let mut product = Product::default();
        product.add("PartA");
        product.add("PartB");
        assert_eq!(product.to_string(), "Product Parts -------\nPartA\nPartB\n");
    }

    #[test]
    fn test_demo_shows_both_products() {
        let out = demo();
        assert_eq!(
            out,
            "\nProduct Parts -------\nPartA\nPartB\n\
             \nProduct Parts -------\nPartX\nPartY\n"
        );
    }
}
