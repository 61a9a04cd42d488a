use crate::model::{Category, VehicleRecord};

/// Record count per category, kept in the order each category first appears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    entries: Vec<(Category, usize)>,
}

impl CategoryCounts {
    pub fn from_records(records: &[VehicleRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.add(record.category);
        }
        counts
    }

    pub fn add(&mut self, category: Category) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category, 1)),
        }
    }

    pub fn get(&self, category: Category) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[(Category, usize)] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Sorted by count descending. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(Category, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(categories: &[Category]) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for category in categories {
            counts.add(*category);
        }
        counts
    }

    #[test]
    fn only_present_categories_appear() {
        let counts = counts_of(&[Category::Hatch, Category::Suv, Category::Hatch]);
        assert_eq!(counts.entries(), &[(Category::Hatch, 2), (Category::Suv, 1)]);
        assert_eq!(counts.get(Category::Moto), 0);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let counts = counts_of(&[
            Category::Moto,
            Category::Sedan,
            Category::Pickup,
            Category::Sedan,
            Category::Pickup,
            Category::Minivan,
        ]);
        assert_eq!(
            counts.ranked(),
            vec![
                (Category::Sedan, 2),
                (Category::Pickup, 2),
                (Category::Moto, 1),
                (Category::Minivan, 1),
            ]
        );
    }

    #[test]
    fn counts_add_up_to_total() {
        let counts = counts_of(&[Category::Outros, Category::Hatch, Category::Outros]);
        assert_eq!(counts.total(), 3);
    }
}
