pub const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md border text-sm font-medium transition disabled:opacity-50 disabled:pointer-events-none";

pub const CARD: &str = "rounded-xl border bg-card shadow-sm";
pub const CARD_HEADER: &str = "p-5 border-b";
pub const CARD_TITLE: &str = "text-base font-semibold";
pub const CARD_CONTENT: &str = "p-5";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    Secondary,
    Outline,
    Ghost,
}

impl Variant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:opacity-90 border-transparent px-4 py-2",
            Self::Secondary => "bg-muted text-foreground hover:bg-muted/80 border-transparent px-4 py-2",
            Self::Outline => "bg-transparent border-border px-4 py-2",
            Self::Ghost => "bg-transparent border-transparent px-2 py-1",
        }
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        match value {
            "secondary" => Self::Secondary,
            "outline" => Self::Outline,
            "ghost" => Self::Ghost,
            _ => Self::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
}

impl Size {
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "text-sm px-3 py-1.5",
            Self::Md => "text-sm px-4 py-2",
        }
    }
}

impl From<&str> for Size {
    fn from(value: &str) -> Self {
        match value {
            "sm" => Self::Sm,
            _ => Self::Md,
        }
    }
}

/// Joins class fragments with single spaces, skipping blank ones.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn button_class(variant: Variant, size: Size, extra: &str) -> String {
    join_classes([BUTTON_BASE, variant.class(), size.class(), extra])
}

/// Class list for a child element rendered in place of the wrapper.
/// The child's own classes come first.
pub fn splice_class(child: &str, computed: &str) -> String {
    join_classes([child, computed])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_selectors_fall_back() {
        assert_eq!(Variant::from("neon"), Variant::Default);
        assert_eq!(Variant::from(""), Variant::Default);
        assert_eq!(Size::from("xl"), Size::Md);
        assert_eq!(Variant::from("ghost"), Variant::Ghost);
        assert_eq!(Size::from("sm"), Size::Sm);
    }

    #[test]
    fn test_button_class_order() {
        let cls = button_class(Variant::Outline, Size::Sm, "gap-2");
        assert!(cls.starts_with(BUTTON_BASE));
        let v = cls.find(Variant::Outline.class()).expect("variant present");
        let s = cls.find(Size::Sm.class()).expect("size present");
        assert!(v < s);
        assert!(cls.ends_with("gap-2"));
    }

    #[test]
    fn test_button_class_without_extra() {
        let cls = button_class(Variant::default(), Size::default(), "");
        assert!(!cls.ends_with(' '));
        assert!(!cls.contains("  "));
    }

    #[test]
    fn test_splice_class() {
        assert_eq!(splice_class("", "a b"), "a b");
        assert_eq!(splice_class("inline-flex gap-1", "a"), "inline-flex gap-1 a");
        assert_eq!(splice_class("  x ", " "), "x");
    }
}
