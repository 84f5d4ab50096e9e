//! Tiered keyword vocabulary mapping categories to user interests.
//!
//! The default table is hand-authored configuration data carried over from
//! the directory's Thai interest vocabulary. It round-trips through serde so
//! deployments can ship a customised table as a static asset.

use clubmatch_core::{Category, CategoryMatch, InterestQuery, MatchTier};
use serde::{Deserialize, Serialize};

/// Keyword lists for one category, ordered by confidence tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeywordTiers {
    /// The category's core names.
    pub primary: Vec<String>,
    /// Named instances and sub-types.
    pub specific: Vec<String>,
    /// Loosely related verbs and nouns.
    pub secondary: Vec<String>,
}

impl KeywordTiers {
    /// Build tiers from string slices.
    #[must_use]
    pub fn new(primary: &[&str], specific: &[&str], secondary: &[&str]) -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| (*w).to_owned()).collect();
        Self {
            primary: owned(primary),
            specific: owned(specific),
            secondary: owned(secondary),
        }
    }

    /// Return the highest tier whose keyword occurs in the lowered query.
    ///
    /// Tiers are tested primary, then specific, then secondary; the first
    /// containment hit wins so a category named outright beats one merely
    /// alluded to.
    fn first_hit(&self, lowered_query: &str) -> Option<(MatchTier, &str)> {
        [
            (MatchTier::Primary, &self.primary),
            (MatchTier::Specific, &self.specific),
            (MatchTier::Secondary, &self.secondary),
        ]
        .into_iter()
        .find_map(|(tier, keywords)| {
            keywords
                .iter()
                .find(|keyword| lowered_query.contains(keyword.as_str()))
                .map(|keyword| (tier, keyword.as_str()))
        })
    }
}

/// Per-category keyword tiers, exhaustive over [`Category`].
///
/// One field per category keeps the mapping total at compile time; there is
/// no string-keyed lookup to fall through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLexicon {
    /// Vocabulary for [`Category::Sports`].
    pub sports: KeywordTiers,
    /// Vocabulary for [`Category::Music`].
    pub music: KeywordTiers,
    /// Vocabulary for [`Category::Art`].
    pub art: KeywordTiers,
    /// Vocabulary for [`Category::Academic`].
    pub academic: KeywordTiers,
    /// Vocabulary for [`Category::Volunteer`].
    pub volunteer: KeywordTiers,
    /// Vocabulary for [`Category::Culture`].
    pub culture: KeywordTiers,
}

impl CategoryLexicon {
    /// Create a lexicon with every tier empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sports: KeywordTiers::default(),
            music: KeywordTiers::default(),
            art: KeywordTiers::default(),
            academic: KeywordTiers::default(),
            volunteer: KeywordTiers::default(),
            culture: KeywordTiers::default(),
        }
    }

    /// Replace one category's tiers while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_tiers(mut self, category: Category, tiers: KeywordTiers) -> Self {
        *self.tiers_mut(category) = tiers;
        self
    }

    /// Borrow the tiers for a category.
    #[must_use]
    pub fn tiers(&self, category: Category) -> &KeywordTiers {
        match category {
            Category::Sports => &self.sports,
            Category::Music => &self.music,
            Category::Art => &self.art,
            Category::Academic => &self.academic,
            Category::Volunteer => &self.volunteer,
            Category::Culture => &self.culture,
        }
    }

    fn tiers_mut(&mut self, category: Category) -> &mut KeywordTiers {
        match category {
            Category::Sports => &mut self.sports,
            Category::Music => &mut self.music,
            Category::Art => &mut self.art,
            Category::Academic => &mut self.academic,
            Category::Volunteer => &mut self.volunteer,
            Category::Culture => &mut self.culture,
        }
    }

    /// Match a category's vocabulary against the query.
    ///
    /// Returns the first tier with a containment hit, or `None` when the
    /// query mentions nothing from the category's vocabulary.
    #[must_use]
    pub fn match_category(
        &self,
        category: Category,
        query: &InterestQuery,
    ) -> Option<CategoryMatch> {
        self.tiers(category)
            .first_hit(query.lowered())
            .map(|(tier, keyword)| CategoryMatch {
                category,
                tier,
                keyword: keyword.to_owned(),
            })
    }
}

impl Default for CategoryLexicon {
    fn default() -> Self {
        Self {
            sports: KeywordTiers::new(
                &["กีฬา", "sport"],
                &[
                    "ฟุตบอล",
                    "แบดมินตัน",
                    "ต่อสู้",
                    "มวย",
                    "บาส",
                    "วอลเลย์",
                    "เทเบิล",
                    "เทนนิส",
                    "ว่ายน้ำ",
                ],
                &["วิ่ง", "เล่น", "ออกกำลัง", "แข่ง", "ฝึก"],
            ),
            music: KeywordTiers::new(
                &["ดนตรี", "music"],
                &[
                    "กีตาร์",
                    "เปียโน",
                    "กลอง",
                    "วง",
                    "คอนเสิร์ต",
                    "แจ๊ส",
                    "คลาสสิก",
                    "ป๊อป",
                ],
                &["เพลง", "ร้อง", "เล่น", "ดนตรี"],
            ),
            art: KeywordTiers::new(
                &["ศิลปะ", "art"],
                &["จิตรกรรม", "ประติมากรรม", "ภาพ", "สี", "ดิจิทัล", "กราฟฟิก"],
                &["วาด", "ระบาย", "สร้างสรรค์"],
            ),
            academic: KeywordTiers::new(
                &["วิชาการ", "academic"],
                &["ภาษา", "คณิต", "วิทย์", "งานวิจัย", "ฟิสิกส์", "เคมี", "ชีววิทยา"],
                &["เรียน", "ติว", "สอน", "ความรู้"],
            ),
            volunteer: KeywordTiers::new(
                &["อาสา", "volunteer"],
                &["บริจาค", "โลหิต", "สิ่งแวดล้อม", "ผู้ด้อยโอกาส", "ผู้สูงอายุ"],
                &["ช่วยเหลือ", "สังคม", "ชุมชน", "พัฒนา"],
            ),
            culture: KeywordTiers::new(
                &["วัฒนธรรม", "culture"],
                &["ใต้", "โนรา", "ภาคใต้", "ไทย", "ดนตรีพื้นบ้าน", "นาฏศิลป์"],
                &["ประเพณี", "ท้องถิ่น", "ศิลปวัฒนธรรม"],
            ),
        }
    }
}
