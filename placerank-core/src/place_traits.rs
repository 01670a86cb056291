//! Enumerated place traits derived once per place.
//!
//! Every factor scorer asks questions such as "is this an outdoor venue?" or
//! "is it quiet?". Rather than re-scanning tag strings for each question, the
//! engine derives a [`PlaceTraitSet`] from the category, sub-category and
//! tags once and answers every question from the bit set.

use std::fmt;

use crate::{Category, Place, keyword};

/// A semantic property a place may have.
///
/// Traits double as the vocabulary of the mood tables, so the set covers both
/// venue kinds (`Outdoor`, `Viewpoint`) and atmosphere (`Quiet`, `Loud`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlaceTrait {
    /// Open-air venue.
    Outdoor,
    /// Enclosed venue.
    Indoor,
    /// Observation deck, rooftop or other view spot.
    Viewpoint,
    /// Calm atmosphere.
    Quiet,
    /// Suitable for working or studying.
    WorkFriendly,
    /// Evening drinks or dinner spot.
    AfterWork,
    /// Serves meals.
    Food,
    /// Desserts and bakery items.
    Dessert,
    /// Serves coffee.
    Coffee,
    /// Physically active.
    Active,
    /// Restful or healing.
    Relaxing,
    /// Good for groups.
    Social,
    /// Games, shows and other entertainment.
    Entertainment,
    /// Comfortable seating or surroundings.
    Comfort,
    /// Nature, water or greenery.
    Natural,
    /// Warm and snug.
    Cozy,
    /// Lively and noisy.
    Loud,
    /// Busy or popular.
    Crowded,
    /// Attractive scenery.
    Scenic,
    /// Unusual or novel.
    Unique,
    /// Private and suited to couples.
    Intimate,
    /// Upscale.
    Elegant,
    /// Quick and easy.
    Convenience,
    /// A restaurant venue.
    Restaurant,
    /// A cafe venue.
    Cafe,
}

impl PlaceTrait {
    /// Every trait, in declaration order.
    pub const ALL: [Self; 25] = [
        Self::Outdoor,
        Self::Indoor,
        Self::Viewpoint,
        Self::Quiet,
        Self::WorkFriendly,
        Self::AfterWork,
        Self::Food,
        Self::Dessert,
        Self::Coffee,
        Self::Active,
        Self::Relaxing,
        Self::Social,
        Self::Entertainment,
        Self::Comfort,
        Self::Natural,
        Self::Cozy,
        Self::Loud,
        Self::Crowded,
        Self::Scenic,
        Self::Unique,
        Self::Intimate,
        Self::Elegant,
        Self::Convenience,
        Self::Restaurant,
        Self::Cafe,
    ];

    /// Lowercase keywords that mark a tag as carrying this trait when they
    /// occur anywhere in it.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Outdoor => &["야외", "outdoor", "공원", "산책", "hiking", "등산", "garden", "정원"],
            Self::Indoor => &["실내", "indoor", "museum", "박물관", "gallery", "미술관", "전시", "cinema", "영화"],
            Self::Viewpoint => &[
                "전망", "viewpoint", "rooftop", "루프탑", "야경", "observatory", "오션뷰", "시티뷰",
                "리버뷰", "뷰맛집",
            ],
            Self::Quiet => &["조용", "quiet", "한적", "calm", "peaceful"],
            Self::WorkFriendly => &["study", "cowork", "quiet", "wifi", "wi-fi", "공부", "작업", "와이파이", "조용"],
            Self::AfterWork => &["wine", "cocktail", "dinner", "와인", "칵테일", "펍", "저녁"],
            Self::Food => &["food", "맛집", "음식", "식사", "meal", "brunch", "브런치"],
            Self::Dessert => &["dessert", "디저트", "bakery", "베이커리", "빵", "cake", "케이크"],
            Self::Coffee => &["coffee", "커피", "espresso", "카페"],
            Self::Active => &["활동", "sports", "스포츠", "운동", "climbing", "클라이밍", "cycling"],
            Self::Relaxing => &["relax", "휴식", "힐링", "healing", "스파", "sauna", "사우나", "찜질", "massage"],
            Self::Social => &["social", "모임", "group", "단체", "party", "파티"],
            Self::Entertainment => &["entertainment", "재미", "game", "게임", "karaoke", "노래방", "공연"],
            Self::Comfort => &["comfort", "편안", "소파", "sofa"],
            Self::Natural => &["nature", "자연", "숲", "forest", "lake", "호수", "river", "beach", "바다"],
            Self::Cozy => &["cozy", "cosy", "아늑", "따뜻"],
            Self::Loud => &["loud", "시끄", "lively", "활기", "club", "클럽"],
            Self::Crowded => &["crowded", "붐비", "popular", "인기", "핫플", "hotplace"],
            Self::Scenic => &["scenic", "경치", "풍경", "sunset", "노을"],
            Self::Unique => &["unique", "이색", "독특", "special", "특별"],
            Self::Intimate => &["intimate", "private", "프라이빗", "couple", "커플", "데이트"],
            Self::Elegant => &["elegant", "고급", "luxury", "fine dining", "파인다이닝", "우아"],
            Self::Convenience => &["convenien", "편의", "fast food", "패스트푸드", "간편", "takeout", "포장"],
            Self::Restaurant => &["restaurant", "식당", "레스토랑"],
            Self::Cafe => &["cafe", "café", "카페"],
        }
    }

    /// Short keywords that only count as a whole token, since they also
    /// occur inside unrelated words ("parking", "review", "public").
    #[must_use]
    pub const fn whole_word_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Outdoor => &["park", "parks"],
            Self::Viewpoint => &["view", "views", "뷰"],
            Self::WorkFriendly => &["work"],
            Self::AfterWork => &["pub", "pubs"],
            Self::Active => &["active", "bike", "bikes"],
            Self::Entertainment => &["fun", "show", "shows"],
            Self::Cozy => &["warm"],
            _ => &[],
        }
    }

    /// Canonical snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outdoor => "outdoors",
            Self::Indoor => "indoor",
            Self::Viewpoint => "viewpoint",
            Self::Quiet => "quiet",
            Self::WorkFriendly => "work_friendly",
            Self::AfterWork => "after_work",
            Self::Food => "food",
            Self::Dessert => "dessert",
            Self::Coffee => "coffee",
            Self::Active => "active",
            Self::Relaxing => "relaxing",
            Self::Social => "social",
            Self::Entertainment => "entertainment",
            Self::Comfort => "comfort",
            Self::Natural => "natural",
            Self::Cozy => "cozy",
            Self::Loud => "loud",
            Self::Crowded => "crowded",
            Self::Scenic => "scenic",
            Self::Unique => "unique",
            Self::Intimate => "intimate",
            Self::Elegant => "elegant",
            Self::Convenience => "convenience",
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
        }
    }

    const fn bit(self) -> u32 {
        1_u32 << (self as u32)
    }

    /// Traits implied by a category regardless of tags.
    const fn implied_by(category: &Category) -> &'static [Self] {
        match category {
            Category::Restaurant => &[Self::Restaurant, Self::Food],
            Category::Cafe => &[Self::Cafe, Self::Coffee],
            Category::Outdoor => &[Self::Outdoor],
            Category::Indoor => &[Self::Indoor],
            Category::Bar | Category::Shopping | Category::Tourism | Category::Other(_) => &[],
        }
    }
}

impl fmt::Display for PlaceTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compact set of [`PlaceTrait`] values.
///
/// # Examples
/// ```
/// use placerank_core::{Category, PlaceTrait, PlaceTraitSet};
///
/// let traits = PlaceTraitSet::derive(&Category::Cafe, None, ["조용한", "Rooftop"]);
/// assert!(traits.contains(PlaceTrait::Quiet));
/// assert!(traits.contains(PlaceTrait::Viewpoint));
/// assert!(traits.contains(PlaceTrait::Coffee));
/// assert!(!traits.contains(PlaceTrait::Outdoor));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlaceTraitSet {
    bits: u32,
}

impl PlaceTraitSet {
    /// An empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Derive traits from a category, optional sub-category and tags.
    #[must_use]
    pub fn derive<I, S>(category: &Category, sub_category: Option<&str>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for implied in PlaceTrait::implied_by(category) {
            set.insert(*implied);
        }
        let labels = sub_category
            .into_iter()
            .map(str::to_lowercase)
            .chain(tags.into_iter().map(|tag| tag.as_ref().to_lowercase()));
        for label in labels {
            set.insert_matching(&label);
        }
        set
    }

    /// Derive the traits of a [`Place`].
    #[must_use]
    pub fn of(place: &Place) -> Self {
        Self::derive(
            &place.category,
            place.sub_category.as_deref(),
            place.tags.iter(),
        )
    }

    fn insert_matching(&mut self, lowercase_label: &str) {
        for candidate in PlaceTrait::ALL {
            if keyword::matches(
                lowercase_label,
                candidate.keywords(),
                candidate.whole_word_keywords(),
            ) {
                self.insert(candidate);
            }
        }
    }

    /// Add a trait.
    pub const fn insert(&mut self, value: PlaceTrait) {
        self.bits |= value.bit();
    }

    /// Add a trait while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, value: PlaceTrait) -> Self {
        self.insert(value);
        self
    }

    /// Report whether the set holds `value`.
    #[must_use]
    pub const fn contains(self, value: PlaceTrait) -> bool {
        self.bits & value.bit() != 0
    }

    /// Report whether the set holds any of `values`.
    #[must_use]
    pub fn contains_any(self, values: &[PlaceTrait]) -> bool {
        values.iter().any(|value| self.contains(*value))
    }

    /// Report whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate over the traits in declaration order.
    pub fn iter(self) -> impl Iterator<Item = PlaceTrait> {
        PlaceTrait::ALL
            .into_iter()
            .filter(move |candidate| self.contains(*candidate))
    }
}

impl FromIterator<PlaceTrait> for PlaceTraitSet {
    fn from_iter<I: IntoIterator<Item = PlaceTrait>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["야외 테라스"], PlaceTrait::Outdoor)]
    #[case(&["Rooftop bar"], PlaceTrait::Viewpoint)]
    #[case(&["wifi"], PlaceTrait::WorkFriendly)]
    #[case(&["조용한"], PlaceTrait::Quiet)]
    #[case(&["cocktail"], PlaceTrait::AfterWork)]
    #[case(&["디저트 맛집"], PlaceTrait::Dessert)]
    #[case(&["Central Park"], PlaceTrait::Outdoor)]
    #[case(&["뷰 맛집"], PlaceTrait::Viewpoint)]
    #[case(&["오션뷰"], PlaceTrait::Viewpoint)]
    #[case(&["city view"], PlaceTrait::Viewpoint)]
    #[case(&["live show"], PlaceTrait::Entertainment)]
    fn tags_map_to_traits(#[case] tags: &[&str], #[case] expected: PlaceTrait) {
        let traits = PlaceTraitSet::derive(&Category::Other("x".into()), None, tags.iter());
        assert!(traits.contains(expected), "{tags:?} should imply {expected}");
    }

    #[rstest]
    #[case(&["리뷰이벤트"], PlaceTrait::Viewpoint)]
    #[case(&["customer reviews"], PlaceTrait::Viewpoint)]
    #[case(&["parking"], PlaceTrait::Outdoor)]
    #[case(&["showroom"], PlaceTrait::Entertainment)]
    #[case(&["funeral hall"], PlaceTrait::Entertainment)]
    #[case(&["warmup area"], PlaceTrait::Cozy)]
    #[case(&["public library"], PlaceTrait::AfterWork)]
    #[case(&["network event"], PlaceTrait::WorkFriendly)]
    fn words_containing_short_keywords_do_not_imply_traits(
        #[case] tags: &[&str],
        #[case] unexpected: PlaceTrait,
    ) {
        let traits = PlaceTraitSet::derive(&Category::Other("x".into()), None, tags.iter());
        assert!(!traits.contains(unexpected), "{tags:?} should not imply {unexpected}");
    }

    #[rstest]
    fn sub_category_contributes_traits() {
        let traits = PlaceTraitSet::derive(&Category::Cafe, Some("Dessert Cafe"), Vec::<String>::new());
        assert!(traits.contains(PlaceTrait::Dessert));
        assert!(traits.contains(PlaceTrait::Cafe));
    }

    #[rstest]
    #[case(Category::Restaurant, PlaceTrait::Food)]
    #[case(Category::Cafe, PlaceTrait::Coffee)]
    #[case(Category::Outdoor, PlaceTrait::Outdoor)]
    #[case(Category::Indoor, PlaceTrait::Indoor)]
    fn categories_imply_traits(#[case] category: Category, #[case] expected: PlaceTrait) {
        let traits = PlaceTraitSet::derive(&category, None, Vec::<String>::new());
        assert!(traits.contains(expected));
    }

    #[rstest]
    fn quiet_tag_marks_quiet_and_work_friendly() {
        let traits = PlaceTraitSet::derive(&Category::Bar, None, ["Quiet"]);
        let collected: Vec<_> = traits.iter().collect();
        assert_eq!(collected, vec![PlaceTrait::Quiet, PlaceTrait::WorkFriendly]);
    }

    #[rstest]
    fn untagged_bar_has_no_traits() {
        let traits = PlaceTraitSet::derive(&Category::Bar, None, Vec::<String>::new());
        assert!(traits.is_empty());
    }

    #[rstest]
    fn collects_from_iterator() {
        let traits: PlaceTraitSet = [PlaceTrait::Loud, PlaceTrait::Crowded].into_iter().collect();
        assert!(traits.contains_any(&[PlaceTrait::Crowded, PlaceTrait::Quiet]));
        assert!(!traits.contains(PlaceTrait::Quiet));
    }
}
