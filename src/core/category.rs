use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// One classification from the fixed battery applied to every inspected
/// character.
///
/// Semantics follow the Unicode general categories (plus the `White_Space`,
/// `Lowercase` and `Uppercase` properties where `char` exposes them directly).
/// The battery is evaluated in [`Category::ALL`] order so report output is
/// stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Cc
    Control,
    /// Nd
    Digit,
    /// L, M, N, P, S or Zs
    Graphic,
    /// L
    Letter,
    Lowercase,
    Uppercase,
    /// M
    Mark,
    /// N
    Number,
    /// L, M, N, P, S or the ASCII space
    Printable,
    /// P
    Punctuation,
    /// `White_Space`
    Whitespace,
    /// S
    Symbol,
    /// Lt
    Titlecase,
}

impl Category {
    /// The full battery, in the order flags are reported.
    pub const ALL: [Category; 13] = [
        Category::Control,
        Category::Digit,
        Category::Graphic,
        Category::Letter,
        Category::Lowercase,
        Category::Uppercase,
        Category::Mark,
        Category::Number,
        Category::Printable,
        Category::Punctuation,
        Category::Whitespace,
        Category::Symbol,
        Category::Titlecase,
    ];

    /// Whether this classification holds for `c`.
    pub fn applies_to(self, c: char) -> bool {
        match self {
            Category::Control => c.is_control(),
            Category::Digit => c.general_category() == GeneralCategory::DecimalNumber,
            Category::Graphic => is_graphic(c),
            Category::Letter => c.general_category_group() == GeneralCategoryGroup::Letter,
            Category::Lowercase => c.is_lowercase(),
            Category::Uppercase => c.is_uppercase(),
            Category::Mark => c.general_category_group() == GeneralCategoryGroup::Mark,
            Category::Number => c.general_category_group() == GeneralCategoryGroup::Number,
            Category::Printable => is_printable(c),
            Category::Punctuation => {
                c.general_category_group() == GeneralCategoryGroup::Punctuation
            }
            Category::Whitespace => c.is_whitespace(),
            Category::Symbol => c.general_category_group() == GeneralCategoryGroup::Symbol,
            Category::Titlecase => c.general_category() == GeneralCategory::TitlecaseLetter,
        }
    }

    /// Every category from the battery that holds for `c`, in battery order.
    pub fn matching(c: char) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| category.applies_to(c))
            .collect()
    }

    /// Short human-readable name, used by the presenters as
    /// "is {label} code point".
    pub fn label(self) -> &'static str {
        match self {
            Category::Control => "control",
            Category::Digit => "digit",
            Category::Graphic => "graphic",
            Category::Letter => "letter",
            Category::Lowercase => "lower case",
            Category::Uppercase => "upper case",
            Category::Mark => "mark",
            Category::Number => "number",
            Category::Printable => "printable",
            Category::Punctuation => "punct",
            Category::Whitespace => "space",
            Category::Symbol => "symbol",
            Category::Titlecase => "title case",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Graphic per the Unicode recommendation: letters, marks, numbers,
/// punctuation, symbols and spacing separators.
fn is_graphic(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter
            | GeneralCategoryGroup::Mark
            | GeneralCategoryGroup::Number
            | GeneralCategoryGroup::Punctuation
            | GeneralCategoryGroup::Symbol
    ) || c.general_category() == GeneralCategory::SpaceSeparator
}

/// Printable: graphic, except the only separator admitted is the ASCII space.
fn is_printable(c: char) -> bool {
    c == ' '
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter
                | GeneralCategoryGroup::Mark
                | GeneralCategoryGroup::Number
                | GeneralCategoryGroup::Punctuation
                | GeneralCategoryGroup::Symbol
        )
}
