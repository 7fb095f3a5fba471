use hilfo_core::models::bank::ItemBank;
use hilfo_core::models::item::{Item, ItemParameters};
use hilfo_core::models::subscale::{ScaleId, Subscale};

use crate::adaptive::AdaptiveConfig;
use crate::Questionnaire;

/// Programmierangst: adaptively administered programming-anxiety scale.
/// Ten 1–5 items, each calibrated with 2PL parameters; two fixed start
/// items, then the external engine selects until the stop rule is met.
pub struct ProgrammingAnxiety;

impl Questionnaire for ProgrammingAnxiety {
    fn id(&self) -> ScaleId {
        ScaleId::ProgrammingAnxiety
    }

    fn name(&self) -> &str {
        "Programmierangst (adaptiv)"
    }

    fn bank(&self) -> &ItemBank {
        static BANK: std::sync::LazyLock<ItemBank> = std::sync::LazyLock::new(|| {
            #[rustfmt::skip]
            let items = vec![
                item("pa_01", "Beim Gedanken, ein Programm schreiben zu müssen, werde ich nervös.", false, 1.60, 0.20),
                item("pa_02", "Ich habe Angst, beim Programmieren Fehler zu machen, die ich nicht beheben kann.", false, 1.35, -0.40),
                item("pa_03", "Wenn eine Fehlermeldung erscheint, gerate ich in Stress.", false, 1.80, -0.10),
                item("pa_04", "Ich fühle mich sicher, wenn ich fremden Programmcode lesen soll.", true, 1.10, 0.90),
                item("pa_05", "Ich befürchte, im Programmierteil des Kurses den Anschluss zu verlieren.", false, 2.05, 0.45),
                item("pa_06", "Vor praktischen Programmierübungen bin ich angespannt.", false, 1.50, 0.00),
                item("pa_07", "Ich traue mir zu, kleine Programme selbstständig zu schreiben.", true, 0.95, -0.70),
                item("pa_08", "Die Arbeit mit der Statistiksoftware R macht mich nervös.", false, 1.70, 0.30),
                item("pa_09", "Ich zweifle daran, Programmieren jemals richtig zu lernen.", false, 1.25, 1.10),
                item("pa_10", "Wenn mein Code nicht funktioniert, bleibe ich gelassen.", true, 1.05, -1.20),
            ];
            ItemBank {
                scale: ScaleId::ProgrammingAnxiety,
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

    fn adaptive(&self) -> Option<&AdaptiveConfig> {
        static CONFIG: std::sync::LazyLock<AdaptiveConfig> =
            std::sync::LazyLock::new(|| AdaptiveConfig {
                min_items: 4,
                max_items: 8,
                se_threshold: 0.4,
                start_items: vec!["pa_01".to_string(), "pa_06".to_string()],
            });
        Some(&CONFIG)
    }
}

fn item(id: &str, prompt: &str, reverse_coded: bool, discrimination: f64, difficulty: f64) -> Item {
    Item {
        id: id.to_string(),
        prompt: prompt.to_string(),
        subscale: Subscale::ProgrammingAnxiety,
        reverse_coded,
        scale_min: 1.0,
        scale_max: 5.0,
        irt: Some(ItemParameters {
            discrimination,
            difficulty,
        }),
    }
}
