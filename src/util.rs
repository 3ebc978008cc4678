use crate::config::Theme;
use crate::consts;
use crate::options::Difficulty;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Settings that apply across screens
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) difficulty: Difficulty,
    pub(crate) theme: Theme,
}

pub(crate) trait EnumExt: Enum + Copy {
    /// Returns the first variant
    fn min() -> Self {
        Self::from_usize(0)
    }

    /// Returns the last variant
    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    /// Iterate over all variants in declaration order
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// Returns the variant before this one, if any
    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    /// Returns the variant after this one, if any
    fn next(self) -> Option<Self> {
        let i = self.into_usize().saturating_add(1);
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }
}

impl<T: Enum + Copy> EnumExt for T {}

/// Center a `size`-sized rectangle within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(30, 8), Rect::new(25, 8, 30, 8))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(35, 5), Rect::new(23, 10, 35, 5))]
    #[case(Rect::new(2, 1, 80, 24), Size::new(20, 20), Rect::new(32, 3, 20, 20))]
    #[case(Rect::new(0, 0, 10, 10), Size::new(10, 10), Rect::new(0, 0, 10, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] expected: Rect) {
        assert_eq!(center_rect(area, size), expected);
    }

    #[test]
    fn enum_ext_bounds() {
        assert_eq!(Difficulty::min(), Difficulty::Easy);
        assert_eq!(Difficulty::max(), Difficulty::Hard);
        assert_eq!(
            Difficulty::iter().collect::<Vec<_>>(),
            [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }

    #[test]
    fn enum_ext_neighbors() {
        assert_eq!(Difficulty::Easy.prev(), None);
        assert_eq!(Difficulty::Medium.prev(), Some(Difficulty::Easy));
        assert_eq!(Difficulty::Medium.next(), Some(Difficulty::Hard));
        assert_eq!(Difficulty::Hard.next(), None);
    }
}
