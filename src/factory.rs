use std::fmt;

// =============================================================================
// Factory Method: each creator variant produces one fixed product variant.
// =============================================================================

/// Variant tag reported for every created product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    A,
    B,
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductKind::A => "ConcreteProductA",
            ProductKind::B => "ConcreteProductB",
        };
        f.write_str(name)
    }
}

/// Marker product; carries nothing beyond its variant tag.
pub trait FactoryProduct {
    fn kind(&self) -> ProductKind;
}

pub struct ConcreteProductA;

impl FactoryProduct for ConcreteProductA {
    fn kind(&self) -> ProductKind {
        ProductKind::A
    }
}

pub struct ConcreteProductB;

impl FactoryProduct for ConcreteProductB {
    fn kind(&self) -> ProductKind {
        ProductKind::B
    }
}

/// The factory method: every call returns a freshly constructed product of
/// the creator's fixed associated variant.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn FactoryProduct>;
}

pub struct ConcreteCreatorA;

impl Creator for ConcreteCreatorA {
    fn factory_method(&self) -> Box<dyn FactoryProduct> {
        Box::new(ConcreteProductA)
    }
}

pub struct ConcreteCreatorB;

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Box<dyn FactoryProduct> {
        Box::new(ConcreteProductB)
    }
}

/// Iterates a fixed creator list and reports each created variant.
pub fn demo() -> String {
    let creators: Vec<Box<dyn Creator>> = vec![Box::new(ConcreteCreatorA), Box::new(ConcreteCreatorB)];

    let mut out = String::new();
    for creator in &creators {
        let product = creator.factory_method();
        out.push_str(&format!("\nCreated {}\n", product.kind()));
    }
    out
}
