// =============================================================================
// Constructor Dependency Injection: two clients receive their dependency at
// construction time — one coupled to the concrete type, one to the trait.
// =============================================================================

/// The capability a client needs: one notification naming the caller.
pub trait Notify {
    fn notify(&self, caller: &str) -> String;
}

/// Stateless concrete dependency.
#[derive(Debug, Default)]
pub struct Dependency;

impl Notify for Dependency {
    fn notify(&self, caller: &str) -> String {
        format!("Hi, I am notify() in {caller}")
    }
}

/// Client coupled to the concrete [`Dependency`] type.
pub struct Client1 {
    dependency: Dependency,
}

impl Client1 {
    pub fn new(dependency: Dependency) -> Self {
        Self { dependency }
    }

    pub fn use_the_dependency(&self) -> String {
        self.dependency.notify("Client1")
    }
}

/// Client coupled only to the [`Notify`] capability; any implementor can be
/// injected without touching this code.
pub struct Client2 {
    dependency: Box<dyn Notify>,
}

impl Client2 {
    pub fn new(dependency: Box<dyn Notify>) -> Self {
        Self { dependency }
    }

    pub fn use_the_dependency(&self) -> String {
        self.dependency.notify("Client2")
    }
}

/// Wires both clients with a [`Dependency`] and narrates their calls.
pub fn demo() -> String {
    let client1 = Client1::new(Dependency);
    let client2 = Client2::new(Box::new(Dependency));
    format!(
        "\n{}\n\n{}\n",
        client1.use_the_dependency(),
        client2.use_the_dependency()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_clients_pass_their_own_label() {
        let client1 = Client1::new(Dependency);
        assert_eq!(client1.use_the_dependency(), "Hi, I am notify() in Client1");

        let client2 = Client2::new(Box::new(Dependency));
        assert_eq!(client2.use_the_dependency(), "Hi, I am notify() in Client2");
    }

    #[test]
    fn test_substituting_the_dependency_keeps_the_label() {
        struct RecordingDependency {
            calls: Rc<RefCell<Vec<String>>>,
        }

        impl Notify for RecordingDependency {
            fn notify(&self, caller: &str) -> String {
                self.calls.borrow_mut().push(caller.to_string());
                format!("recorded a call from {caller}")
            }
        }

        let calls = Rc::new(RefCell::new(Vec::new()));
        let client2 = Client2::new(Box::new(RecordingDependency {
            calls: Rc::clone(&calls),
        }));

        assert_eq!(client2.use_the_dependency(), "recorded a call from Client2");
        assert_eq!(*calls.borrow(), ["Client2"]);
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(
            demo(),
            "\nHi, I am notify() in Client1\n\nHi, I am notify() in Client2\n"
        );
    }
}
