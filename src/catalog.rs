//! Creature definitions. The set is fixed for the lifetime of the program.

use crate::error::CatalogError;
use crate::model::{CreatureDef, Rarity};

const SPRITES: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
const CRIES: &str = "https://raw.githubusercontent.com/PokeAPI/cries/main/cries/pokemon/latest";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    creatures: Vec<CreatureDef>,
    regular: Vec<usize>,
    legendary: Vec<usize>,
    hazard: usize,
}

impl Catalog {
    /// Validates the definitions and indexes the rarity pools.
    pub fn new(creatures: Vec<CreatureDef>) -> Result<Self, CatalogError> {
        let hazards: Vec<usize> = indices(&creatures, |c| c.rarity == Rarity::Hazard);
        if hazards.len() != 1 {
            return Err(CatalogError::HazardCount(hazards.len()));
        }
        let regular = indices(&creatures, |c| c.rarity == Rarity::Common);
        if regular.is_empty() {
            return Err(CatalogError::EmptyRegularPool);
        }
        let legendary = indices(&creatures, |c| c.rarity == Rarity::Legendary);
        Ok(Self { hazard: hazards[0], creatures, regular, legendary })
    }

    /// Loads a JSON array of creature definitions.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let creatures: Vec<CreatureDef> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Json(e.to_string()))?;
        Self::new(creatures)
    }

    /// The eleven creatures of the arcade cabinet.
    pub fn standard() -> Self {
        let common = |name: &str, dex: u32, points: u64| creature(name, dex, points, Rarity::Common, true);
        let creatures = vec![
            common("Pikachu", 25, 10),
            common("Bulbasaur", 1, 15),
            common("Charmander", 4, 15),
            common("Squirtle", 7, 15),
            common("Jigglypuff", 39, 20),
            common("Meowth", 52, 20),
            common("Psyduck", 54, 25),
            common("Snorlax", 143, 30),
            creature("Zubat", 41, 0, Rarity::Hazard, false),
            creature("Mewtwo", 150, 100, Rarity::Legendary, false),
            creature("Mew", 151, 100, Rarity::Legendary, false),
        ];
        Self {
            regular: indices(&creatures, |c| c.rarity == Rarity::Common),
            legendary: indices(&creatures, |c| c.rarity == Rarity::Legendary),
            hazard: 8,
            creatures,
        }
    }

    pub fn all(&self) -> &[CreatureDef] {
        &self.creatures
    }

    /// Creatures that are neither hazard nor legendary.
    pub fn regular_pool(&self) -> Vec<&CreatureDef> {
        self.regular.iter().map(|&i| &self.creatures[i]).collect()
    }

    pub fn legendary_pool(&self) -> Vec<&CreatureDef> {
        self.legendary.iter().map(|&i| &self.creatures[i]).collect()
    }

    pub fn hazard(&self) -> &CreatureDef {
        &self.creatures[self.hazard]
    }

    pub fn find(&self, name: &str) -> Option<&CreatureDef> {
        self.creatures.iter().find(|c| c.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn creature(name: &str, dex: u32, points: u64, rarity: Rarity, shiny_eligible: bool) -> CreatureDef {
    CreatureDef {
        name: name.to_string(),
        points,
        rarity,
        shiny_eligible,
        image: format!("{SPRITES}/{dex}.png"),
        cry: format!("{CRIES}/{dex}.ogg"),
    }
}

fn indices(creatures: &[CreatureDef], keep: impl Fn(&CreatureDef) -> bool) -> Vec<usize> {
    creatures.iter().enumerate().filter(|(_, c)| keep(c)).map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pools() {
        let cat = Catalog::standard();
        assert_eq!(cat.all().len(), 11);
        assert_eq!(cat.regular_pool().len(), 8);
        assert!(cat.regular_pool().iter().all(|c| c.rarity == Rarity::Common && c.points > 0));
        let legends: Vec<&str> = cat.legendary_pool().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(legends, ["Mewtwo", "Mew"]);
        assert_eq!(cat.hazard().name, "Zubat");
        assert_eq!(cat.hazard().points, 0);
        assert_eq!(cat.find("Psyduck").map(|c| c.points), Some(25));
        assert_eq!(Catalog::new(cat.all().to_vec()), Ok(cat));
    }

    #[test]
    fn rejects_missing_or_duplicate_hazard() {
        let cat = Catalog::standard();
        let no_hazard: Vec<CreatureDef> = cat.all().iter().filter(|c| !c.is_hazard()).cloned().collect();
        assert_eq!(Catalog::new(no_hazard), Err(CatalogError::HazardCount(0)));
        let mut two = cat.all().to_vec();
        two.push(cat.hazard().clone());
        assert_eq!(Catalog::new(two), Err(CatalogError::HazardCount(2)));
    }

    #[test]
    fn json_catalog_without_legendaries() {
        let raw = r#"[
            {"name":"Eevee","points":12,"rarity":"Common","shiny_eligible":true,"image":"eevee.png"},
            {"name":"Golbat","rarity":"Hazard","image":"golbat.png"}
        ]"#;
        let cat = Catalog::from_json(raw).unwrap();
        assert!(cat.legendary_pool().is_empty());
        assert_eq!(cat.hazard().points, 0);
        assert!(cat.hazard().cry.is_empty());
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
        let only_hazard = r#"[{"name":"Golbat","rarity":"Hazard","image":"g.png"}]"#;
        assert_eq!(Catalog::from_json(only_hazard), Err(CatalogError::EmptyRegularPool));
    }
}
