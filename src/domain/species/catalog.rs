//! Well-known species grouped for browsing

use serde::Serialize;

/// A species entry with its everyday name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonSpecies {
    pub common: &'static str,
    pub scientific: &'static str,
}

/// Browsing categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogCategory {
    Mammals,
    Birds,
    ReptilesAmphibians,
    Insects,
    Plants,
}

impl CatalogCategory {
    pub const ALL: [CatalogCategory; 5] = [
        Self::Mammals,
        Self::Birds,
        Self::ReptilesAmphibians,
        Self::Insects,
        Self::Plants,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Mammals => "mammals",
            Self::Birds => "birds",
            Self::ReptilesAmphibians => "reptiles-amphibians",
            Self::Insects => "insects",
            Self::Plants => "plants",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mammals => "Mammals",
            Self::Birds => "Birds",
            Self::ReptilesAmphibians => "Reptiles/Amphibians",
            Self::Insects => "Insects",
            Self::Plants => "Plants",
        }
    }

    /// Accepts a slug or a label, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(name) || c.label().eq_ignore_ascii_case(name))
    }

    pub fn species(&self) -> &'static [CommonSpecies] {
        match self {
            Self::Mammals => MAMMALS,
            Self::Birds => BIRDS,
            Self::ReptilesAmphibians => REPTILES_AMPHIBIANS,
            Self::Insects => INSECTS,
            Self::Plants => PLANTS,
        }
    }
}

const fn sp(common: &'static str, scientific: &'static str) -> CommonSpecies {
    CommonSpecies { common, scientific }
}

const MAMMALS: &[CommonSpecies] = &[
    sp("Lion", "Panthera leo"),
    sp("Tiger", "Panthera tigris"),
    sp("Leopard", "Panthera pardus"),
    sp("Jaguar", "Panthera onca"),
    sp("Wolf", "Canis lupus"),
    sp("Brown Bear", "Ursus arctos"),
    sp("Elephant", "Loxodonta africana"),
    sp("Gorilla", "Gorilla gorilla"),
    sp("Orangutan", "Pongo pygmaeus"),
    sp("Giant Panda", "Ailuropoda melanoleuca"),
    sp("Bison", "Bison bison"),
    sp("Cheetah", "Acinonyx jubatus"),
    sp("Hippopotamus", "Hippopotamus amphibius"),
    sp("Rhinoceros", "Diceros bicornis"),
    sp("Moose", "Alces alces"),
];

const BIRDS: &[CommonSpecies] = &[
    sp("Bald Eagle", "Haliaeetus leucocephalus"),
    sp("Peregrine Falcon", "Falco peregrinus"),
    sp("Common Raven", "Corvus corax"),
    sp("Ostrich", "Struthio camelus"),
    sp("Peacock", "Pavo cristatus"),
    sp("African Grey Parrot", "Psittacus erithacus"),
    sp("House Sparrow", "Passer domesticus"),
    sp("Ruby-throated Hummingbird", "Archilochus colubris"),
    sp("Green Woodpecker", "Picus viridis"),
    sp("Kingfisher", "Alcedo atthis"),
    sp("Greater Flamingo", "Phoenicopterus roseus"),
    sp("Emperor Penguin", "Aptenodytes forsteri"),
    sp("Barn Swallow", "Hirundo rustica"),
    sp("Herring Gull", "Larus argentatus"),
    sp("Blue Jay", "Cyanocitta cristata"),
];

const REPTILES_AMPHIBIANS: &[CommonSpecies] = &[
    sp("American Alligator", "Alligator mississippiensis"),
    sp("Green Iguana", "Iguana iguana"),
    sp("Komodo Dragon", "Varanus komodoensis"),
    sp("Panther Chameleon", "Furcifer pardalis"),
    sp("Garter Snake", "Thamnophis sirtalis"),
    sp("King Cobra", "Ophiophagus hannah"),
    sp("American Bullfrog", "Lithobates catesbeianus"),
    sp("Common Toad", "Bufo bufo"),
    sp("Axolotl", "Ambystoma mexicanum"),
    sp("Eastern Newt", "Notophthalmus viridescens"),
    sp("Nile Crocodile", "Crocodylus niloticus"),
    sp("Green Sea Turtle", "Chelonia mydas"),
    sp("Green Anole", "Anolis carolinensis"),
    sp("Five-lined Skink", "Plestiodon fasciatus"),
    sp("House Gecko", "Hemidactylus frenatus"),
];

const INSECTS: &[CommonSpecies] = &[
    sp("Monarch Butterfly", "Danaus plexippus"),
    sp("Honey Bee", "Apis mellifera"),
    sp("Ladybug", "Coccinella septempunctata"),
    sp("Dragonfly", "Anax junius"),
    sp("Grasshopper", "Schistocerca americana"),
    sp("Firefly", "Photinus pyralis"),
    sp("Ant", "Formica rufa"),
    sp("Beetle", "Coleoptera"),
    sp("Moth", "Lepidoptera"),
    sp("Mosquito", "Culicidae"),
    sp("Cockroach", "Periplaneta americana"),
    sp("Praying Mantis", "Mantis religiosa"),
    sp("Termite", "Reticulitermes flavipes"),
    sp("Wasp", "Vespula vulgaris"),
    sp("Periodical Cicada", "Magicicada septendecim"),
];

const PLANTS: &[CommonSpecies] = &[
    sp("Rose", "Rosa rubiginosa"),
    sp("Sunflower", "Helianthus annuus"),
    sp("Tulip", "Tulipa gesneriana"),
    sp("Oak", "Quercus robur"),
    sp("Maple", "Acer saccharum"),
    sp("Pine", "Pinus sylvestris"),
    sp("Bamboo", "Phyllostachys edulis"),
    sp("Lavender", "Lavandula angustifolia"),
    sp("Orchid", "Phalaenopsis amabilis"),
    sp("Daisy", "Bellis perennis"),
    sp("Daffodil", "Narcissus pseudonarcissus"),
    sp("Cactus", "Carnegiea gigantea"),
    sp("Fern", "Nephrolepis exaltata"),
    sp("Ivy", "Hedera helix"),
    sp("Mint", "Mentha spicata"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_fifteen_species() {
        for category in CatalogCategory::ALL {
            assert_eq!(category.species().len(), 15, "{}", category.label());
        }
    }

    #[test]
    fn test_from_name_accepts_slug_and_label() {
        assert_eq!(
            CatalogCategory::from_name("reptiles-amphibians"),
            Some(CatalogCategory::ReptilesAmphibians)
        );
        assert_eq!(
            CatalogCategory::from_name("Reptiles/Amphibians"),
            Some(CatalogCategory::ReptilesAmphibians)
        );
        assert_eq!(CatalogCategory::from_name("BIRDS"), Some(CatalogCategory::Birds));
        assert_eq!(CatalogCategory::from_name("fungi"), None);
    }

    #[test]
    fn test_lion_is_first_mammal() {
        let first = CatalogCategory::Mammals.species()[0];
        assert_eq!(first.scientific, "Panthera leo");
    }
}
