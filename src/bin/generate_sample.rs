use std::fs;
use std::path::Path;

/// Header row matching what the loader requires, including the plural on the
/// first citation column as in the real dataset.
const HEADERS: [&str; 9] = [
    "Partie",
    "Sous Partie",
    "Sujet",
    "Citations 1",
    "Fonction 1",
    "Citation 2",
    "Fonction 2",
    "Citation 3",
    "Fonction 3",
];

fn main() {
    let rows: Vec<[&str; 9]> = vec![
        [
            "Partie 1 – Paroles de maintenanciers",
            "Dix parcours inspirants",
            "Transmission du savoir",
            "La maintenance, c'est d'abord une histoire de transmission.",
            "Chef d'atelier",
            "On apprend le métier en regardant les anciens.",
            "Technicien",
            "",
            "",
        ],
        [
            "Partie 1 – Paroles de maintenanciers",
            "Dix parcours inspirants",
            "Transmission du savoir",
            "Former un jeune, c'est préparer la relève.",
            "Responsable maintenance",
            "",
            "",
            "",
            "",
        ],
        [
            "Partie 1 – Paroles de maintenanciers",
            "Dix parcours inspirants",
            "Fierté du métier",
            "Quand la ligne redémarre, c'est grâce à nous.",
            "Électromécanicien",
            "Personne ne voit notre travail, sauf quand il manque.",
            "Technicien",
            "Un bon dépannage, ça se fête.",
            "Agent de maîtrise",
        ],
        [
            "Partie 1 – Paroles de maintenanciers",
            "Le quotidien du terrain",
            "Gestion des pannes",
            "Une panne, c'est une enquête : on cherche des indices.",
            "Technicien",
            "",
            "",
            "",
            "",
        ],
        [
            "Partie 1 – Paroles de maintenanciers",
            "Le quotidien du terrain",
            "Gestion des pannes",
            "",
            "",
            "",
            "",
            "",
            "",
        ],
        [
            "Partie 2 – Regards des directions",
            "Vision stratégique",
            "Place de la maintenance",
            "La maintenance n'est pas un coût, c'est un investissement.",
            "Directeur industriel",
            "",
            "",
            "",
            "",
        ],
        [
            "Partie 2 – Regards des directions",
            "Vision stratégique",
            "Place de la maintenance",
            "Sans maintenance fiable, pas de production fiable.",
            "Directeur d'usine",
            "",
            "",
            "",
            "",
        ],
        [
            "Partie 2 – Regards des directions",
            "Attentes et moyens",
            "Budget et arbitrages",
            "",
            "",
            "",
            "",
            "",
            "",
        ],
        [
            "Partie 3 – Perspectives",
            "Maintenance de demain",
            "Numérique et capteurs",
            "Le capteur alerte, mais c'est l'humain qui décide.",
            "Ingénieur fiabilité",
            "La donnée ne remplace pas l'oreille du mécanicien.",
            "Technicien",
            "",
            "",
        ],
        [
            "Partie 3 – Perspectives",
            "Maintenance de demain",
            "Attractivité du métier",
            "Il faut donner envie aux jeunes de mettre les mains dedans.",
            "Formateur",
            "",
            "",
            "",
            "",
        ],
    ];

    let output_path = "data/corpus.csv";
    fs::create_dir_all(Path::new(output_path).parent().unwrap())
        .expect("Failed to create data directory");

    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer.write_record(HEADERS).expect("Failed to write header");
    for row in &rows {
        writer.write_record(row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {} corpus rows to {output_path}", rows.len());
}
