//! The ordered, immutable list of aliens shown in the gallery.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog must contain at least one alien")]
    Empty,

    #[error("Duplicate alien id '{id}'")]
    DuplicateId { id: String },
}

/// One selectable alien.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alien {
    /// Stable identifier (e.g., "heatblast").
    pub id: String,
    /// Display name (e.g., "Heatblast").
    pub name: String,
    /// Species line shown under the name.
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Preview clip the renderer reloads when this alien is highlighted.
    #[serde(default)]
    pub video: String,
    /// Fan wiki page shown by "Learn more".
    #[serde(default)]
    pub wiki_url: Option<String>,
}

/// One entry of the abilities panel on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: String,
}

impl Alien {
    pub fn abilities(&self) -> Vec<Ability> {
        vec![
            Ability {
                name: "Primary Power",
                icon: "⚡",
                description: self.description.clone(),
            },
            Ability {
                name: "Enhanced Durability",
                icon: "🛡",
                description: "Resistant to physical damage".to_string(),
            },
            Ability {
                name: "Combat Skills",
                icon: "⚔",
                description: "Advanced fighting capabilities".to_string(),
            },
            Ability {
                name: "Energy Projection",
                icon: "💥",
                description: "Can project energy attacks".to_string(),
            },
        ]
    }
}

/// Non-empty ordered alien list with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    aliens: Vec<Alien>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            aliens: builtin_aliens(),
        }
    }
}

impl Catalog {
    pub fn from_aliens(aliens: Vec<Alien>) -> Result<Self, CatalogError> {
        if aliens.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for alien in &aliens {
            if !seen.insert(alien.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: alien.id.clone(),
                });
            }
        }
        Ok(Self { aliens })
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Alien> {
        self.aliens.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter()
    }
}

fn alien(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    icon: &str,
    wiki: &str,
) -> Alien {
    Alien {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        video: format!("/aliens/{id}.mp4"),
        wiki_url: Some(format!("https://ben10.fandom.com/wiki/{wiki}")),
    }
}

fn builtin_aliens() -> Vec<Alien> {
    vec![
        alien(
            "heatblast",
            "Heatblast",
            "Pyronite",
            "Generates and manipulates fire and intense heat",
            "🔥",
            "Heatblast_(Classic)",
        ),
        alien(
            "fourarms",
            "Four Arms",
            "Tetramand",
            "Superhuman strength from four powerful arms",
            "💪",
            "Four_Arms_(Classic)",
        ),
        alien(
            "diamondhead",
            "Diamondhead",
            "Petrosapien",
            "Crystal body that forms blades and deflects energy",
            "💎",
            "Diamondhead_(Classic)",
        ),
        alien(
            "ghostfreak",
            "Ghostfreak",
            "Ectonurite",
            "Intangible, invisible and able to possess others",
            "👻",
            "Ghostfreak",
        ),
        alien(
            "humungousaur",
            "Humungousaur",
            "Vaxasaurian",
            "Grows to towering size with immense strength",
            "🦖",
            "Humungousaur_(Classic)",
        ),
    ]
}

/// Fixed content of the Alien X page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialProfile {
    pub name: &'static str,
    pub species: &'static str,
    pub powers: &'static [&'static str],
    pub weakness: &'static str,
}

pub const ALIEN_X: SpecialProfile = SpecialProfile {
    name: "ALIEN-X",
    species: "Celestialsapien - The Omnipotent Being",
    powers: &[
        "Omnipotence - Unlimited power over reality",
        "Reality Manipulation - Alter the fabric of existence",
        "Universal Creation/Destruction",
    ],
    weakness: "Internal conflict between Serena and Bellicus personalities can prevent \
               action and decision-making, rendering immense power useless.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_five_aliens() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(0).map(|a| a.id.as_str()), Some("heatblast"));
        assert_eq!(catalog.get(4).map(|a| a.id.as_str()), Some("humungousaur"));
        assert!(catalog.get(5).is_none());
    }

    #[test]
    fn builtin_aliens_have_wiki_links() {
        for alien in Catalog::default().iter() {
            let url = alien.wiki_url.as_deref().unwrap_or_default();
            assert!(url.starts_with("https://ben10.fandom.com/wiki/"), "{url}");
        }
    }

    #[test]
    fn empty_catalog_rejected() {
        assert_eq!(Catalog::from_aliens(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut aliens = builtin_aliens();
        aliens.push(aliens[1].clone());
        assert_eq!(
            Catalog::from_aliens(aliens),
            Err(CatalogError::DuplicateId {
                id: "fourarms".to_string()
            })
        );
    }

    #[test]
    fn primary_ability_uses_description() {
        let catalog = Catalog::default();
        let alien = catalog.get(2).unwrap();
        let abilities = alien.abilities();
        assert_eq!(abilities.len(), 4);
        assert_eq!(abilities[0].description, alien.description);
    }
}
