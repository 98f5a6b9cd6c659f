use std::fmt::Display;

/// Formats `Hello, {name}!`. The name is inserted verbatim, empty included.
pub fn greet(name: impl Display) -> String {
    format!("Hello, {}!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_world() {
        assert_eq!(greet("World"), "Hello, World!");
    }

    #[test]
    fn test_greet_empty_name() {
        assert_eq!(greet(""), "Hello, !");
    }

    #[test]
    fn test_greet_non_text() {
        assert_eq!(greet(42), "Hello, 42!");
        assert_eq!(greet(String::from("Ferris")), "Hello, Ferris!");
    }
}
