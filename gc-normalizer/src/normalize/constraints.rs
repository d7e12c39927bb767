//! GC column length limits

/// Maximum length per GC column, applied in this order to columns present
/// in the table
pub const COLUMN_CONSTRAINTS: &[(&str, usize)] = &[
    ("Famille", 5),
    ("Situation_TVA", 1),
    ("Facturation", 5),
    ("Titre", 5),
    ("Titre_Lib", 30),
    ("Ville_Rcs", 30),
    ("Capital_Social", 30),
    ("Nom", 40),
    ("Representant_Nom", 40),
    ("Prenom", 30),
    ("Depot_Nom", 30),
    ("Tel_Fixe", 15),
    ("Tel_Mobile", 15),
    ("Fax", 15),
    ("Pays_Taxation", 2),
    ("Categorie_Tarifaire", 5),
    ("Delais_Reglement", 5),
    ("Mode_Reglement", 5),
    ("Ristourne_Pied", 15),
    ("Remise_Ligne", 15),
    ("Encours_Autorise", 15),
    ("Taux", 15),
    ("Nr_TVA_intracommunautaire", 15),
    ("Representant", 7),
    ("Depot", 7),
    ("Parrain", 7),
    ("Comite_Entreprise_Code", 7),
    ("Date_Creation", 10),
    ("Entreprise_Nr_Siret", 14),
    ("Entreprise_Nr_Siren", 20),
    ("Site_Internet", 100),
    ("Visibilité", 1),
    ("Bloc_Notes", 1000),
];

/// Columns truncated before the constraint table, always expected in the input
pub const REQUIRED_TRUNCATIONS: &[(&str, usize)] = &[("Nom", 40), ("Email", 90), ("Téléphone", 15)];

/// Built-in limit for a column, if any
pub fn limit_for(column: &str) -> Option<usize> {
    COLUMN_CONSTRAINTS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, max)| *max)
}
