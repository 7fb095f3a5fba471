use hilfo_core::models::bank::ItemBank;
use hilfo_core::models::item::Item;
use hilfo_core::models::subscale::{ScaleId, Subscale};

use crate::Questionnaire;

/// PSQ-20: Perceived Stress Questionnaire, German 20-item form.
/// Worries, Tension, Joy, and Demands subscales, five items each, on a
/// 1–4 frequency scale. "Ausgeruht" and "genug Zeit für sich" are
/// reverse-coded within their subscales.
pub struct Psq20;

impl Questionnaire for Psq20 {
    fn id(&self) -> ScaleId {
        ScaleId::Psq20
    }

    fn name(&self) -> &str {
        "PSQ-20"
    }

    fn bank(&self) -> &ItemBank {
        static BANK: std::sync::LazyLock<ItemBank> = std::sync::LazyLock::new(|| {
            #[rustfmt::skip]
            let items = vec![
                item("psq_01", "Sie fürchten, Ihre Ziele nicht erreichen zu können.", Subscale::Worries, false),
                item("psq_02", "Sie fühlen sich ausgeruht.", Subscale::Tension, true),
                item("psq_03", "Sie sind voller Energie.", Subscale::Joy, false),
                item("psq_04", "Sie haben das Gefühl, dass zu viel von Ihnen verlangt wird.", Subscale::Demands, false),
                item("psq_05", "Sie haben Angst vor der Zukunft.", Subscale::Worries, false),
                item("psq_06", "Sie fühlen sich angespannt.", Subscale::Tension, false),
                item("psq_07", "Sie fühlen sich sicher und geschützt.", Subscale::Joy, false),
                item("psq_08", "Sie haben zu viel zu tun.", Subscale::Demands, false),
                item("psq_09", "Sie machen sich viele Sorgen.", Subscale::Worries, false),
                item("psq_10", "Sie fühlen sich geistig erschöpft.", Subscale::Tension, false),
                item("psq_11", "Sie haben Spaß an dem, was Sie tun.", Subscale::Joy, false),
                item("psq_12", "Sie fühlen sich gehetzt.", Subscale::Demands, false),
                item("psq_13", "Ihre Probleme scheinen sich aufzutürmen.", Subscale::Worries, false),
                item("psq_14", "Sie haben Schwierigkeiten, sich zu entspannen.", Subscale::Tension, false),
                item("psq_15", "Sie sind leichten Herzens.", Subscale::Joy, false),
                item("psq_16", "Sie haben genug Zeit für sich.", Subscale::Demands, true),
                item("psq_17", "Sie haben das Gefühl, dass viele Dinge schiefgehen könnten.", Subscale::Worries, false),
                item("psq_18", "Sie fühlen sich körperlich erschöpft.", Subscale::Tension, false),
                item("psq_19", "Sie fühlen sich ausgeglichen.", Subscale::Joy, false),
                item("psq_20", "Sie stehen unter Termindruck.", Subscale::Demands, false),
            ];
            ItemBank {
                scale: ScaleId::Psq20,
                anchors: vec![
                    "fast nie".to_string(),
                    "manchmal".to_string(),
                    "häufig".to_string(),
                    "meistens".to_string(),
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
        scale_max: 4.0,
        irt: None,
    }
}
