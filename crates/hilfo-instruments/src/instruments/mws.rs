use hilfo_core::models::bank::ItemBank;
use hilfo_core::models::item::Item;
use hilfo_core::models::subscale::{ScaleId, Subscale};

use crate::Questionnaire;

/// MWS: study-skills questionnaire (Studierkompetenzen).
/// Time management, literature search, and academic writing, four items
/// each on a 1–5 scale.
pub struct Mws;

impl Questionnaire for Mws {
    fn id(&self) -> ScaleId {
        ScaleId::Mws
    }

    fn name(&self) -> &str {
        "MWS Studierkompetenzen"
    }

    fn bank(&self) -> &ItemBank {
        static BANK: std::sync::LazyLock<ItemBank> = std::sync::LazyLock::new(|| {
            #[rustfmt::skip]
            let items = vec![
                item("mws_01", "Ich plane meine Arbeitswoche im Voraus.", Subscale::TimeManagement, false),
                item("mws_02", "Ich beginne rechtzeitig mit der Prüfungsvorbereitung.", Subscale::TimeManagement, false),
                item("mws_03", "Ich schiebe unangenehme Aufgaben oft auf.", Subscale::TimeManagement, true),
                item("mws_04", "Bei größeren Aufgaben verliere ich leicht den Überblick.", Subscale::TimeManagement, true),
                item("mws_05", "Ich finde passende Fachliteratur zu einem Thema.", Subscale::LiteratureSearch, false),
                item("mws_06", "Ich kann die Qualität einer Quelle gut einschätzen.", Subscale::LiteratureSearch, false),
                item("mws_07", "Die Recherche in Literaturdatenbanken fällt mir schwer.", Subscale::LiteratureSearch, true),
                item("mws_08", "Ich nutze die Angebote der Universitätsbibliothek regelmäßig.", Subscale::LiteratureSearch, false),
                item("mws_09", "Es fällt mir leicht, meine Gedanken schriftlich zu strukturieren.", Subscale::AcademicWriting, false),
                item("mws_10", "Ich kenne die Regeln wissenschaftlichen Zitierens.", Subscale::AcademicWriting, false),
                item("mws_11", "Das Schreiben wissenschaftlicher Texte überfordert mich.", Subscale::AcademicWriting, true),
                item("mws_12", "Ich überarbeite meine Texte mehrfach, bevor ich sie abgebe.", Subscale::AcademicWriting, false),
            ];
            ItemBank {
                scale: ScaleId::Mws,
                anchors: vec![
                    "trifft überhaupt nicht zu".to_string(),
                    "trifft eher nicht zu".to_string(),
                    "teils, teils".to_string(),
                    "trifft eher zu".to_string(),
                    "trifft voll und ganz zu".to_string(),
                ],
                items,
            }
        });
        &BANK
    }
}

fn item(id: &str, prompt: &str, subscale: Subscale, reverse_coded: bool) -> Item {
    Item {
        id: id.to_string(),
        prompt: prompt.to_string(),
        subscale,
        reverse_coded,
        scale_min: 1.0,
        scale_max: 5.0,
        irt: None,
    }
}
