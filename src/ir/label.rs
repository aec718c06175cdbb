use std::fmt;

/// Opaque identity of a block, used as a jump target.
///
/// Labels compare by identity only; the numeric id carries no meaning
/// beyond uniqueness within one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(u32);

impl Label {
    pub fn new(id: u32) -> Self {
        Label(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_identity() {
        let a = Label::new(0);
        let b = Label::new(0);
        let c = Label::new(1);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::new(7).to_string(), "label_7");
    }
}
