use hilfo_core::models::bank::ItemBank;
use hilfo_core::models::item::Item;
use hilfo_core::models::subscale::{ScaleId, Subscale};

use crate::Questionnaire;

/// BFI-2-S: Big Five Inventory-2, German 30-item short form.
/// Six items per dimension, domains interleaved in blocks of five.
/// 1–5 agreement scale; 15 items reverse-coded, three per dimension.
pub struct Bfi2;

impl Questionnaire for Bfi2 {
    fn id(&self) -> ScaleId {
        ScaleId::Bfi2
    }

    fn name(&self) -> &str {
        "BFI-2-S"
    }

    fn bank(&self) -> &ItemBank {
        static BANK: std::sync::LazyLock<ItemBank> = std::sync::LazyLock::new(|| {
            #[rustfmt::skip]
            let items = vec![
                item("bfi_01", "Ich gehe aus mir heraus, bin gesellig.", Subscale::Extraversion, false),
                item("bfi_02", "Ich bin einfühlsam, warmherzig.", Subscale::Agreeableness, false),
                item("bfi_03", "Ich bin eher unordentlich.", Subscale::Conscientiousness, true),
                item("bfi_04", "Ich mache mir oft Sorgen.", Subscale::NegativeEmotionality, false),
                item("bfi_05", "Ich kann mich für Kunst, Musik und Literatur begeistern.", Subscale::OpenMindedness, false),
                item("bfi_06", "Ich bin eher ruhig.", Subscale::Extraversion, true),
                item("bfi_07", "Ich bin manchmal unhöflich und schroff.", Subscale::Agreeableness, true),
                item("bfi_08", "Ich erledige Aufgaben gründlich.", Subscale::Conscientiousness, false),
                item("bfi_09", "Ich bleibe auch in stressigen Situationen gelassen.", Subscale::NegativeEmotionality, true),
                item("bfi_10", "Ich habe wenig Interesse an abstrakten Überlegungen.", Subscale::OpenMindedness, true),
                item("bfi_11", "Ich bin voller Energie und Tatendrang.", Subscale::Extraversion, false),
                item("bfi_12", "Ich schenke anderen leicht Vertrauen, glaube an das Gute im Menschen.", Subscale::Agreeableness, false),
                item("bfi_13", "Ich bin verlässlich, auf mich kann man zählen.", Subscale::Conscientiousness, false),
                item("bfi_14", "Ich bin oft deprimiert, niedergeschlagen.", Subscale::NegativeEmotionality, false),
                item("bfi_15", "Ich bin originell, entwickle neue Ideen.", Subscale::OpenMindedness, false),
                item("bfi_16", "Ich bin manchmal schüchtern, gehemmt.", Subscale::Extraversion, true),
                item("bfi_17", "Ich neige dazu, andere zu kritisieren.", Subscale::Agreeableness, true),
                item("bfi_18", "Ich neige dazu, Aufgaben vor mir herzuschieben.", Subscale::Conscientiousness, true),
                item("bfi_19", "Ich fühle mich selten ängstlich oder traurig.", Subscale::NegativeEmotionality, true),
                item("bfi_20", "Ich habe nur wenig künstlerische Interessen.", Subscale::OpenMindedness, true),
                item("bfi_21", "Ich neige dazu, die Führung zu übernehmen.", Subscale::Extraversion, false),
                item("bfi_22", "Ich begegne anderen mit Respekt.", Subscale::Agreeableness, false),
                item("bfi_23", "Ich mag es sauber und aufgeräumt.", Subscale::Conscientiousness, false),
                item("bfi_24", "Ich bin launisch, habe schwankende Stimmungen.", Subscale::NegativeEmotionality, false),
                item("bfi_25", "Ich bin neugierig auf viele verschiedene Dinge.", Subscale::OpenMindedness, false),
                item("bfi_26", "Es fällt mir schwer, andere zu beeinflussen.", Subscale::Extraversion, true),
                item("bfi_27", "Ich interessiere mich wenig für die Probleme anderer.", Subscale::Agreeableness, true),
                item("bfi_28", "Ich bin manchmal ziemlich nachlässig.", Subscale::Conscientiousness, true),
                item("bfi_29", "Ich behalte meine Gefühle unter Kontrolle.", Subscale::NegativeEmotionality, true),
                item("bfi_30", "Mir fällt es schwer, mich auf neue Ideen einzulassen.", Subscale::OpenMindedness, true),
            ];
            ItemBank {
                scale: ScaleId::Bfi2,
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
