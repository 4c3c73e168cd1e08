//! General Category lookup
//!
//! Categories are kept as a flag set so a code point reported under several
//! categories is listed in full. Order of [`Category::ALL`] is the order in
//! which names are reported.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Unicode General Category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    MarkNonSpacing,
    MarkSpacingCombining,
    MarkEnclosing,
    NumberDecimalDigit,
    NumberLetter,
    NumberOther,
    SeparatorSpace,
    SeparatorLine,
    SeparatorParagraph,
    OtherControl,
    OtherFormat,
    OtherSurrogate,
    OtherPrivateUse,
    OtherNotAssigned,
    LetterUppercase,
    LetterLowercase,
    LetterTitlecase,
    LetterModifier,
    LetterOther,
    PunctuationConnector,
    PunctuationDash,
    PunctuationOpen,
    PunctuationClose,
    PunctuationInitialQuote,
    PunctuationFinalQuote,
    PunctuationOther,
    SymbolMath,
    SymbolCurrency,
    SymbolModifier,
    SymbolOther,
}

impl Category {
    /// All categories in reporting order
    pub const ALL: [Category; 30] = [
        Category::MarkNonSpacing,
        Category::MarkSpacingCombining,
        Category::MarkEnclosing,
        Category::NumberDecimalDigit,
        Category::NumberLetter,
        Category::NumberOther,
        Category::SeparatorSpace,
        Category::SeparatorLine,
        Category::SeparatorParagraph,
        Category::OtherControl,
        Category::OtherFormat,
        Category::OtherSurrogate,
        Category::OtherPrivateUse,
        Category::OtherNotAssigned,
        Category::LetterUppercase,
        Category::LetterLowercase,
        Category::LetterTitlecase,
        Category::LetterModifier,
        Category::LetterOther,
        Category::PunctuationConnector,
        Category::PunctuationDash,
        Category::PunctuationOpen,
        Category::PunctuationClose,
        Category::PunctuationInitialQuote,
        Category::PunctuationFinalQuote,
        Category::PunctuationOther,
        Category::SymbolMath,
        Category::SymbolCurrency,
        Category::SymbolModifier,
        Category::SymbolOther,
    ];

    /// Long name, e.g. `Letter_Uppercase`
    pub fn long_name(self) -> &'static str {
        match self {
            Category::MarkNonSpacing => "Mark_NonSpacing",
            Category::MarkSpacingCombining => "Mark_SpacingCombining",
            Category::MarkEnclosing => "Mark_Enclosing",
            Category::NumberDecimalDigit => "Number_DecimalDigit",
            Category::NumberLetter => "Number_Letter",
            Category::NumberOther => "Number_Other",
            Category::SeparatorSpace => "Separator_Space",
            Category::SeparatorLine => "Separator_Line",
            Category::SeparatorParagraph => "Separator_Paragraph",
            Category::OtherControl => "Other_Control",
            Category::OtherFormat => "Other_Format",
            Category::OtherSurrogate => "Other_Surrogate",
            Category::OtherPrivateUse => "Other_PrivateUse",
            Category::OtherNotAssigned => "Other_NotAssigned",
            Category::LetterUppercase => "Letter_Uppercase",
            Category::LetterLowercase => "Letter_Lowercase",
            Category::LetterTitlecase => "Letter_Titlecase",
            Category::LetterModifier => "Letter_Modifier",
            Category::LetterOther => "Letter_Other",
            Category::PunctuationConnector => "Punctuation_Connector",
            Category::PunctuationDash => "Punctuation_Dash",
            Category::PunctuationOpen => "Punctuation_Open",
            Category::PunctuationClose => "Punctuation_Close",
            Category::PunctuationInitialQuote => "Punctuation_InitialQuote",
            Category::PunctuationFinalQuote => "Punctuation_FinalQuote",
            Category::PunctuationOther => "Punctuation_Other",
            Category::SymbolMath => "Symbol_Math",
            Category::SymbolCurrency => "Symbol_Currency",
            Category::SymbolModifier => "Symbol_Modifier",
            Category::SymbolOther => "Symbol_Other",
        }
    }

    /// Two-letter property value alias, e.g. `Lu`
    pub fn short_code(self) -> &'static str {
        match self {
            Category::MarkNonSpacing => "Mn",
            Category::MarkSpacingCombining => "Mc",
            Category::MarkEnclosing => "Me",
            Category::NumberDecimalDigit => "Nd",
            Category::NumberLetter => "Nl",
            Category::NumberOther => "No",
            Category::SeparatorSpace => "Zs",
            Category::SeparatorLine => "Zl",
            Category::SeparatorParagraph => "Zp",
            Category::OtherControl => "Cc",
            Category::OtherFormat => "Cf",
            Category::OtherSurrogate => "Cs",
            Category::OtherPrivateUse => "Co",
            Category::OtherNotAssigned => "Cn",
            Category::LetterUppercase => "Lu",
            Category::LetterLowercase => "Ll",
            Category::LetterTitlecase => "Lt",
            Category::LetterModifier => "Lm",
            Category::LetterOther => "Lo",
            Category::PunctuationConnector => "Pc",
            Category::PunctuationDash => "Pd",
            Category::PunctuationOpen => "Ps",
            Category::PunctuationClose => "Pe",
            Category::PunctuationInitialQuote => "Pi",
            Category::PunctuationFinalQuote => "Pf",
            Category::PunctuationOther => "Po",
            Category::SymbolMath => "Sm",
            Category::SymbolCurrency => "Sc",
            Category::SymbolModifier => "Sk",
            Category::SymbolOther => "So",
        }
    }

    /// Bit for this category in a [`CategorySet`]
    pub const fn flag(self) -> u32 {
        1 << (self as u8)
    }
}

impl From<GeneralCategory> for Category {
    #[allow(unreachable_patterns)]
    fn from(gc: GeneralCategory) -> Self {
        match gc {
            GeneralCategory::NonspacingMark => Category::MarkNonSpacing,
            GeneralCategory::SpacingMark => Category::MarkSpacingCombining,
            GeneralCategory::EnclosingMark => Category::MarkEnclosing,
            GeneralCategory::DecimalNumber => Category::NumberDecimalDigit,
            GeneralCategory::LetterNumber => Category::NumberLetter,
            GeneralCategory::OtherNumber => Category::NumberOther,
            GeneralCategory::SpaceSeparator => Category::SeparatorSpace,
            GeneralCategory::LineSeparator => Category::SeparatorLine,
            GeneralCategory::ParagraphSeparator => Category::SeparatorParagraph,
            GeneralCategory::Control => Category::OtherControl,
            GeneralCategory::Format => Category::OtherFormat,
            GeneralCategory::Surrogate => Category::OtherSurrogate,
            GeneralCategory::PrivateUse => Category::OtherPrivateUse,
            GeneralCategory::Unassigned => Category::OtherNotAssigned,
            GeneralCategory::UppercaseLetter => Category::LetterUppercase,
            GeneralCategory::LowercaseLetter => Category::LetterLowercase,
            GeneralCategory::TitlecaseLetter => Category::LetterTitlecase,
            GeneralCategory::ModifierLetter => Category::LetterModifier,
            GeneralCategory::OtherLetter => Category::LetterOther,
            GeneralCategory::ConnectorPunctuation => Category::PunctuationConnector,
            GeneralCategory::DashPunctuation => Category::PunctuationDash,
            GeneralCategory::OpenPunctuation => Category::PunctuationOpen,
            GeneralCategory::ClosePunctuation => Category::PunctuationClose,
            GeneralCategory::InitialPunctuation => Category::PunctuationInitialQuote,
            GeneralCategory::FinalPunctuation => Category::PunctuationFinalQuote,
            GeneralCategory::OtherPunctuation => Category::PunctuationOther,
            GeneralCategory::MathSymbol => Category::SymbolMath,
            GeneralCategory::CurrencySymbol => Category::SymbolCurrency,
            GeneralCategory::ModifierSymbol => Category::SymbolModifier,
            GeneralCategory::OtherSymbol => Category::SymbolOther,
            _ => Category::OtherNotAssigned,
        }
    }
}

/// Set of General Categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySet(u32);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    /// Categories reported for a code point.
    ///
    /// Surrogates are classified here because they are not `char`s; values
    /// past U+10FFFF yield the empty set.
    pub fn of(code_point: u32) -> Self {
        if (0xD800..=0xDFFF).contains(&code_point) {
            return Self::EMPTY.with(Category::OtherSurrogate);
        }
        match char::from_u32(code_point) {
            Some(c) => Self::EMPTY.with(get_general_category(c).into()),
            None => Self::EMPTY,
        }
    }

    /// Add a category
    pub fn with(self, category: Category) -> Self {
        CategorySet(self.0 | category.flag())
    }

    /// Check membership
    pub fn contains(self, category: Category) -> bool {
        self.0 & category.flag() != 0
    }

    /// Check if any category of `other` is present
    pub fn intersects(self, other: CategorySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in reporting order
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// `"<LongName> (<ShortCode>)"` entries joined with `", "`
    pub fn names(self) -> String {
        self.iter()
            .map(|c| format!("{} ({})", c.long_name(), c.short_code()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(CategorySet::EMPTY, CategorySet::with)
    }
}

/// Category names of a code point; empty if none is recognized
pub fn category_names(code_point: u32) -> String {
    CategorySet::of(code_point).names()
}

/// Whether a code point is worth printing in a glyph view
///
/// Every `Other_*` category is skipped (controls, format characters,
/// surrogates, private use and unassigned), as are values that are not
/// Unicode scalar values.
pub fn is_printable(code_point: u32) -> bool {
    const HIDDEN: CategorySet = CategorySet(
        Category::OtherControl.flag()
            | Category::OtherFormat.flag()
            | Category::OtherSurrogate.flag()
            | Category::OtherPrivateUse.flag()
            | Category::OtherNotAssigned.flag()
    );
    if char::from_u32(code_point).is_none() {
        return false;
    }
    !CategorySet::of(code_point).intersects(HIDDEN)
}
