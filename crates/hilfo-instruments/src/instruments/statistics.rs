use hilfo_core::models::bank::ItemBank;
use hilfo_core::models::item::Item;
use hilfo_core::models::subscale::{ScaleId, Subscale};

use crate::Questionnaire;

/// Einstellungen zur Statistik: attitudes toward the statistics course.
/// Affect, perceived value, and self-efficacy, four items each on a 1–5
/// scale.
pub struct Statistics;

impl Questionnaire for Statistics {
    fn id(&self) -> ScaleId {
        ScaleId::Statistics
    }

    fn name(&self) -> &str {
        "Einstellungen zur Statistik"
    }

    fn bank(&self) -> &ItemBank {
        static BANK: std::sync::LazyLock<ItemBank> = std::sync::LazyLock::new(|| {
            #[rustfmt::skip]
            let items = vec![
                item("stat_01", "Statistik macht mir Spaß.", Subscale::StatisticsAffect, false),
                item("stat_02", "Bei Statistikaufgaben fühle ich mich unwohl.", Subscale::StatisticsAffect, true),
                item("stat_03", "Ich freue mich auf die Statistikveranstaltungen.", Subscale::StatisticsAffect, false),
                item("stat_04", "Statistik bereitet mir Unbehagen.", Subscale::StatisticsAffect, true),
                item("stat_05", "Statistische Kenntnisse werden mir im späteren Beruf nützlich sein.", Subscale::StatisticsValue, false),
                item("stat_06", "Statistik ist für die Psychologie unverzichtbar.", Subscale::StatisticsValue, false),
                item("stat_07", "Für meinen Alltag ist Statistik ohne Bedeutung.", Subscale::StatisticsValue, true),
                item("stat_08", "Forschungsergebnisse kann ich nur mit Statistikkenntnissen richtig einordnen.", Subscale::StatisticsValue, false),
                item("stat_09", "Ich bin zuversichtlich, statistische Verfahren anwenden zu können.", Subscale::StatisticsSelfEfficacy, false),
                item("stat_10", "Auch schwierige Statistikaufgaben kann ich mit genügend Zeit lösen.", Subscale::StatisticsSelfEfficacy, false),
                item("stat_11", "Im Vergleich zu meinen Mitstudierenden fällt mir Statistik schwer.", Subscale::StatisticsSelfEfficacy, true),
                item("stat_12", "Statistische Formeln verstehe ich meist schnell.", Subscale::StatisticsSelfEfficacy, false),
            ];
            ItemBank {
                scale: ScaleId::Statistics,
                anchors: vec![
                    "stimme überhaupt nicht zu".to_string(),
                    "stimme eher nicht zu".to_string(),
                    "weder noch".to_string(),
                    "stimme eher zu".to_string(),
                    "stimme voll und ganz zu".to_string(),
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
