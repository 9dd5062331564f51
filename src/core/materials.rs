use std::collections::HashMap;
use crate::models::{MaterialGroup, MaterialOption, RecyclingPoint};

/// Materials offered by the search form, in display order
pub static MATERIAL_OPTIONS: [MaterialOption; 12] = [
    MaterialOption { id: "plásticos industriais", label: "Plásticos Industriais", category: "Polímeros" },
    MaterialOption { id: "pneus de mineração", label: "Pneus de Mineração", category: "Borrachas" },
    MaterialOption { id: "correias transportadoras", label: "Correias Transportadoras", category: "Borrachas" },
    MaterialOption { id: "mangueiras industriais", label: "Mangueiras Industriais", category: "Borrachas" },
    MaterialOption { id: "cabos", label: "Cabos Elétricos", category: "Eletrônicos" },
    MaterialOption { id: "componentes eletrônicos", label: "Componentes Eletrônicos", category: "Eletrônicos" },
    MaterialOption { id: "equipamentos obsoletos", label: "Equipamentos Obsoletos", category: "Equipamentos" },
    MaterialOption { id: "baterias industriais", label: "Baterias Industriais", category: "Químicos" },
    MaterialOption { id: "tubulações", label: "Tubulações Plásticas", category: "Polímeros" },
    MaterialOption { id: "filtros", label: "Filtros Industriais", category: "Diversos" },
    MaterialOption { id: "resinas", label: "Resinas e Polímeros", category: "Químicos" },
    MaterialOption { id: "estruturas metálicas", label: "Estruturas Metálicas", category: "Diversos" },
];

impl MaterialOption {
    /// Look up a form option by its identifier (case-insensitive)
    pub fn find(id: &str) -> Option<&'static MaterialOption> {
        let id = id.to_lowercase();
        MATERIAL_OPTIONS.iter().find(|m| m.id.to_lowercase() == id)
    }

    /// Group form options by category, keeping first-seen category order
    pub fn grouped() -> Vec<MaterialGroup> {
        let mut groups: Vec<MaterialGroup> = Vec::new();
        let mut index: HashMap<&'static str, usize> = HashMap::new();

        for option in MATERIAL_OPTIONS.iter().copied() {
            let slot = *index.entry(option.category).or_insert_with(|| {
                groups.push(MaterialGroup {
                    category: option.category,
                    materials: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].materials.push(option);
        }

        groups
    }
}

/// Compare a selected material against an accepted one
///
/// Case-folded equality, or either string containing the other, so
/// "cabos" matches "cabos elétricos".
#[inline]
pub fn materials_match(selected: &str, accepted: &str) -> bool {
    let selected = selected.to_lowercase();
    let accepted = accepted.to_lowercase();

    accepted.contains(&selected) || selected.contains(&accepted)
}

/// Check if the point accepts at least one of the selected materials
#[inline]
pub fn accepts_any(point: &RecyclingPoint, selected: &[String]) -> bool {
    selected.iter().any(|material| {
        point
            .accepted_materials
            .iter()
            .any(|accepted| materials_match(material, accepted))
    })
}

/// Check if the point accepts every selected material
#[inline]
pub fn accepts_all(point: &RecyclingPoint, selected: &[String]) -> bool {
    selected.iter().all(|material| {
        point
            .accepted_materials
            .iter()
            .any(|accepted| materials_match(material, accepted))
    })
}

/// Accepted materials of the point that match some selected material
pub fn highlighted_materials(point: &RecyclingPoint, selected: &[String]) -> Vec<String> {
    point
        .accepted_materials
        .iter()
        .filter(|accepted| selected.iter().any(|material| materials_match(material, accepted)))
        .cloned()
        .collect()
}
