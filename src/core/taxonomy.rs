//! The gallery's control taxonomy.
//!
//! Controls are grouped into a closed set of categories. Categories sort in
//! declaration order (the order of the navigation menu); controls sort by
//! category first, then by name. Icons are Segoe Fluent Icons code points.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Top-level navigation group.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Category {
    #[strum(serialize = "Basic Input")]
    BasicInput,
    Collections,
    #[strum(serialize = "Date and Time")]
    DateAndTime,
    #[strum(serialize = "Dialogs and Flyouts")]
    DialogsAndFlyouts,
    Layout,
    Media,
    #[strum(serialize = "Menus and Toolbars")]
    MenusAndToolbars,
    Motion,
    Navigation,
    Scrolling,
    #[strum(serialize = "Status and Info")]
    StatusAndInfo,
    Text,
}

impl Category {
    /// Position in the navigation menu.
    pub fn sort_order(self) -> usize {
        self as usize
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::BasicInput => '\u{E73A}',
            Self::Collections => '\u{E80A}',
            Self::DateAndTime => '\u{EC92}',
            Self::DialogsAndFlyouts => '\u{E8BD}',
            Self::Layout => '\u{E8A1}',
            Self::Media => '\u{EA69}',
            Self::MenusAndToolbars => '\u{E700}',
            Self::Motion => '\u{E7AD}',
            Self::Navigation => '\u{E8AB}',
            Self::Scrolling => '\u{E8CB}',
            Self::StatusAndInfo => '\u{E946}',
            Self::Text => '\u{E8D2}',
        }
    }

    /// Controls in this category, sorted by name.
    pub fn controls(self) -> Vec<Control> {
        let mut controls: Vec<_> = Control::iter().filter(|c| c.category() == self).collect();
        controls.sort_by_key(|c| c.name());
        controls
    }
}

/// A control page. Names match the gallery's page titles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
pub enum Control {
    // Basic Input
    Button,
    CheckBox,
    ColorPicker,
    ComboBox,
    DropDownButton,
    HyperlinkButton,
    RadioButton,
    RatingControl,
    Slider,
    SplitButton,
    ToggleButton,
    ToggleSwitch,
    // Collections
    FlipView,
    GridView,
    ItemsRepeater,
    ListBox,
    ListView,
    TreeView,
    // Date and Time
    CalendarDatePicker,
    CalendarView,
    DatePicker,
    TimePicker,
    // Dialogs and Flyouts
    ContentDialog,
    Flyout,
    TeachingTip,
    // Layout
    Border,
    Canvas,
    Expander,
    Grid,
    RelativePanel,
    StackPanel,
    VariableSizedWrapGrid,
    Viewbox,
    // Media
    AnimatedIcon,
    Image,
    MediaPlayerElement,
    PersonPicture,
    WebView2,
    // Menus and Toolbars
    AppBarButton,
    CommandBar,
    MenuBar,
    MenuFlyout,
    // Motion
    ConnectedAnimation,
    EasingFunction,
    ImplicitTransition,
    PageTransition,
    // Navigation
    BreadcrumbBar,
    NavigationView,
    Pivot,
    SelectorBar,
    TabView,
    // Scrolling
    AnnotatedScrollBar,
    PipsPager,
    ScrollViewer,
    SemanticZoom,
    // Status and Info
    InfoBadge,
    InfoBar,
    ProgressBar,
    ProgressRing,
    ToolTip,
    // Text
    AutoSuggestBox,
    NumberBox,
    PasswordBox,
    RichEditBox,
    RichTextBlock,
    TextBlock,
    TextBox,
}

impl Control {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub const fn category(self) -> Category {
        use Control as C;
        match self {
            C::Button
            | C::CheckBox
            | C::ColorPicker
            | C::ComboBox
            | C::DropDownButton
            | C::HyperlinkButton
            | C::RadioButton
            | C::RatingControl
            | C::Slider
            | C::SplitButton
            | C::ToggleButton
            | C::ToggleSwitch => Category::BasicInput,
            C::FlipView
            | C::GridView
            | C::ItemsRepeater
            | C::ListBox
            | C::ListView
            | C::TreeView => Category::Collections,
            C::CalendarDatePicker | C::CalendarView | C::DatePicker | C::TimePicker => {
                Category::DateAndTime
            }
            C::ContentDialog | C::Flyout | C::TeachingTip => Category::DialogsAndFlyouts,
            C::Border
            | C::Canvas
            | C::Expander
            | C::Grid
            | C::RelativePanel
            | C::StackPanel
            | C::VariableSizedWrapGrid
            | C::Viewbox => Category::Layout,
            C::AnimatedIcon
            | C::Image
            | C::MediaPlayerElement
            | C::PersonPicture
            | C::WebView2 => Category::Media,
            C::AppBarButton | C::CommandBar | C::MenuBar | C::MenuFlyout => {
                Category::MenusAndToolbars
            }
            C::ConnectedAnimation
            | C::EasingFunction
            | C::ImplicitTransition
            | C::PageTransition => Category::Motion,
            C::BreadcrumbBar | C::NavigationView | C::Pivot | C::SelectorBar | C::TabView => {
                Category::Navigation
            }
            C::AnnotatedScrollBar | C::PipsPager | C::ScrollViewer | C::SemanticZoom => {
                Category::Scrolling
            }
            C::InfoBadge | C::InfoBar | C::ProgressBar | C::ProgressRing | C::ToolTip => {
                Category::StatusAndInfo
            }
            C::AutoSuggestBox
            | C::NumberBox
            | C::PasswordBox
            | C::RichEditBox
            | C::RichTextBlock
            | C::TextBlock
            | C::TextBox => Category::Text,
        }
    }

    /// The control's own icon, or its category's when it has none.
    pub const fn glyph(self) -> char {
        match self {
            Self::AutoSuggestBox => '\u{E721}',
            Self::CheckBox => '\u{E739}',
            Self::ColorPicker => '\u{E790}',
            Self::DatePicker | Self::CalendarDatePicker => '\u{E787}',
            Self::TimePicker => '\u{E823}',
            Self::PasswordBox => '\u{E8D7}',
            Self::ProgressRing => '\u{F16A}',
            Self::RatingControl => '\u{E734}',
            Self::Slider => '\u{E9E9}',
            _ => self.category().glyph(),
        }
    }
}

impl PartialOrd for Control {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Control {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.category()
            .cmp(&other.category())
            .then_with(|| self.name().cmp(other.name()))
    }
}

/// Every control, in menu order.
pub fn sorted_controls() -> Vec<Control> {
    let mut controls: Vec<_> = Control::iter().collect();
    controls.sort();
    controls
}

/// Control names in menu order; the suggestion box's default candidates.
pub fn control_names() -> Vec<&'static str> {
    sorted_controls().into_iter().map(Control::name).collect()
}

/// Sample list from the gallery's AutoSuggestBox page.
pub const CAT_BREEDS: &[&str] = &[
    "Abyssinian",
    "American Bobtail",
    "American Curl",
    "American Shorthair",
    "Balinese",
    "Bengal",
    "Birman",
    "Bombay",
    "British Shorthair",
    "Burmese",
    "Chartreux",
    "Cornish Rex",
    "Devon Rex",
    "Egyptian Mau",
    "Exotic Shorthair",
    "Himalayan",
    "Japanese Bobtail",
    "Korat",
    "Maine Coon",
    "Manx",
    "Norwegian Forest Cat",
    "Ocicat",
    "Oriental Shorthair",
    "Persian",
    "Ragdoll",
    "Russian Blue",
    "Savannah",
    "Scottish Fold",
    "Siamese",
    "Siberian",
    "Sphynx",
    "Tonkinese",
    "Turkish Angora",
    "Turkish Van",
];

/// Which candidate list the suggestion box searches.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CandidateSource {
    /// Control page names
    #[default]
    Controls,
    /// The cat breed sample list
    Breeds,
}

impl CandidateSource {
    pub fn candidates(self) -> Vec<&'static str> {
        match self {
            Self::Controls => control_names(),
            Self::Breeds => CAT_BREEDS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::suggest::filter;

    #[test]
    fn test_category_sort_follows_declaration() {
        let categories: Vec<_> = Category::iter().collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(Category::BasicInput.sort_order(), 0);
        assert_eq!(Category::Text.sort_order(), 11);
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::DialogsAndFlyouts.to_string(), "Dialogs and Flyouts");
        assert_eq!(
            "Status and Info".parse::<Category>(),
            Ok(Category::StatusAndInfo)
        );
        assert_eq!(Category::Layout.to_string(), "Layout");
    }

    #[test]
    fn test_every_category_has_controls() {
        for category in Category::iter() {
            assert!(!category.controls().is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn test_category_contains_its_controls() {
        for control in Control::iter() {
            assert!(control.category().controls().contains(&control));
        }
    }

    #[test]
    fn test_sorted_controls_group_by_category() {
        let sorted = sorted_controls();
        assert_eq!(sorted.len(), Control::iter().count());
        assert!(
            sorted
                .windows(2)
                .all(|w| w[0].category() <= w[1].category())
        );
        assert_eq!(sorted.first(), Some(&Control::Button));
        assert_eq!(sorted.last(), Some(&Control::TextBox));
    }

    #[test]
    fn test_sort_is_stable_across_calls() {
        assert_eq!(control_names(), control_names());
    }

    #[test]
    fn test_glyph_falls_back_to_category() {
        assert_eq!(Control::Grid.glyph(), Category::Layout.glyph());
        assert_ne!(Control::AutoSuggestBox.glyph(), Category::Text.glyph());
    }

    #[test]
    fn test_control_names_are_searchable() {
        let names = control_names();
        assert_eq!(
            filter("picker", &names).items(),
            vec!["ColorPicker", "CalendarDatePicker", "DatePicker", "TimePicker"]
        );
        assert_eq!(filter("easing", &names).items(), vec!["EasingFunction"]);
    }

    #[test]
    fn test_breeds_keep_list_order() {
        assert_eq!(
            filter("ma", CAT_BREEDS).items(),
            vec!["Birman", "Egyptian Mau", "Himalayan", "Maine Coon", "Manx"]
        );
        // Substrings match inside words, not only at their start
        assert_eq!(filter("rma", CAT_BREEDS).items(), vec!["Birman"]);
        assert_eq!(filter("ma coon", CAT_BREEDS).items(), vec!["Maine Coon"]);
    }

    #[test]
    fn test_candidate_source() {
        assert_eq!(CandidateSource::default(), CandidateSource::Controls);
        assert_eq!(
            "breeds".parse::<CandidateSource>(),
            Ok(CandidateSource::Breeds)
        );
        assert_eq!(CandidateSource::Breeds.candidates().len(), CAT_BREEDS.len());
    }
}
