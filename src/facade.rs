use itertools::Itertools;

// =============================================================================
// Facade: one front door over four independent subsystems, exposing two
// coarser operations that each hit a fixed subset in a fixed order.
// =============================================================================

pub struct SubsystemOne;

impl SubsystemOne {
    pub fn operation(&self) -> String {
        " SubsystemOne operation".to_string()
    }
}

pub struct SubsystemTwo;

impl SubsystemTwo {
    pub fn operation(&self) -> String {
        " SubsystemTwo operation".to_string()
    }
}

pub struct SubsystemThree;

impl SubsystemThree {
    pub fn operation(&self) -> String {
        " SubsystemThree operation".to_string()
    }
}

pub struct SubsystemFour;

impl SubsystemFour {
    pub fn operation(&self) -> String {
        " SubsystemFour operation".to_string()
    }
}

/// Owns one instance of each subsystem for its whole lifetime.
pub struct Facade {
    one: SubsystemOne,
    two: SubsystemTwo,
    three: SubsystemThree,
    four: SubsystemFour,
}

impl Facade {
    pub fn new() -> Self {
        Self {
            one: SubsystemOne,
            two: SubsystemTwo,
            three: SubsystemThree,
            four: SubsystemFour,
        }
    }

    /// Runs subsystems one, two, four, in that order.
    pub fn method_a(&self) -> Vec<String> {
        vec![
            self.one.operation(),
            self.two.operation(),
            self.four.operation(),
        ]
    }

    /// Runs subsystems two, three, in that order.
    pub fn method_b(&self) -> Vec<String> {
        vec![self.two.operation(), self.three.operation()]
    }
}

impl Default for Facade {
    fn default() -> Self {
        Self::new()
    }
}

/// Exercises both facade operations and narrates their output.
pub fn demo() -> String {
    let facade = Facade::new();
    format!(
        "\nMethodA() ----\n{}\n\nMethodB() ----\n{}\n",
        facade.method_a().iter().join("\n"),
        facade.method_b().iter().join("\n"),
    )
}
