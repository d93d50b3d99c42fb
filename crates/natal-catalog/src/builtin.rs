//! The builtin reference catalog: 4 questions, 3 options each, and the
//! detail cards for the three archetypes.

use natal_core::model::{
    Archetype, ArchetypeDetail, DetailSection, OptionId, Question, QuestionOption, WeightMap,
};

use crate::Catalog;

fn option(id: &str, text: &str, icon: &str, weights: (u8, u8, u8)) -> QuestionOption {
    QuestionOption {
        id: OptionId::from(id),
        text: text.to_string(),
        icon: icon.to_string(),
        weights: WeightMap::new(weights.0, weights.1, weights.2),
    }
}

fn question(step: u32, prompt: &str, options: Vec<QuestionOption>) -> Question {
    Question {
        step,
        prompt: prompt.to_string(),
        options,
    }
}

fn section(title: &str, items: &[&str]) -> DetailSection {
    DetailSection {
        title: title.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the builtin catalog. The weights are the reference questionnaire's;
/// each option weights all three archetypes on a 0–100 scale.
pub fn builtin() -> Catalog {
    let questions = vec![
        question(
            1,
            "What birth environment would feel reassuring?",
            vec![
                option("a", "Naturally, at my own pace", "🌿", (80, 40, 20)),
                option(
                    "b",
                    "Talking things through with the staff",
                    "🤝",
                    (40, 85, 45),
                ),
                option(
                    "c",
                    "In the hands of equipment and specialists",
                    "🏥",
                    (20, 45, 90),
                ),
            ],
        ),
        question(
            2,
            "Who should lead the birth?",
            vec![
                option("a", "I want to judge and drive it myself", "👤", (85, 35, 15)),
                option(
                    "b",
                    "I want to decide together, in conversation",
                    "🤝",
                    (35, 88, 40),
                ),
                option(
                    "c",
                    "I want to leave the calls to the professionals",
                    "👨‍⚕️",
                    (15, 40, 92),
                ),
            ],
        ),
        question(
            3,
            "What kind of experience should the birth be?",
            vec![
                option("a", "The experience itself matters most", "💫", (90, 50, 25)),
                option("b", "Experience and safety in balance", "⚖️", (50, 92, 55)),
                option("c", "Safety comes before everything", "🛡️", (20, 50, 95)),
            ],
        ),
        question(
            4,
            "What worries you most about giving birth?",
            vec![
                option("a", "Too much medical intervention", "⚠️", (85, 40, 15)),
                option(
                    "b",
                    "How an emergency would be handled",
                    "🚨",
                    (40, 85, 50),
                ),
                option(
                    "c",
                    "Risk, and the safety of mother and child",
                    "🛡️",
                    (15, 45, 90),
                ),
            ],
        ),
    ];

    let details = vec![
        ArchetypeDetail {
            id: Archetype::NaturalAutonomy,
            name: "Natural Autonomy".to_string(),
            subtitle: "Wants to keep the lead on their own birth".to_string(),
            description: "You value a birth that moves at its natural pace, listening to \
                          your own body and steering the process yourself. You trust \
                          medicine, but you hope for as natural a course as possible."
                .to_string(),
            values: strings(&[
                "Autonomy and respect for your own pace",
                "A natural birth experience",
                "Choices and freedom",
                "Dialogue with your body",
            ]),
            characteristics: strings(&[
                "Trusts what their own body tells them",
                "Puts weight on a relaxing environment",
                "Follows their intuition over outside opinion",
                "Sees birth as one of life's defining experiences",
            ]),
            environment: section(
                "Suitable birth environments",
                &[
                    "Midwifery home (continuous midwife-led care)",
                    "Home birth",
                    "General maternity clinic (doctor and midwife in concert)",
                ],
            ),
            medical: section(
                "Medical support model",
                &[
                    "Doctor on call rather than ever-present",
                    "Midwife provides the central support",
                    "The natural course is respected",
                    "Medical intervention only when needed",
                ],
            ),
            customization: "Highly customizable: environment, who attends, and birthing \
                            position are yours to choose."
                .to_string(),
            suitability: "Suits low-risk pregnancies where a natural course is expected."
                .to_string(),
        },
        ArchetypeDetail {
            id: Archetype::Balanced,
            name: "Balanced".to_string(),
            subtitle: "Nature and medicine, side by side".to_string(),
            description: "You care about the natural flow of birth while also wanting the \
                          reassurance medicine brings. You would like to shape a birth \
                          that is yours, in conversation with your care team."
                .to_string(),
            values: strings(&[
                "Naturalness and reassurance together",
                "A trusting relationship with the care team",
                "Flexibility when things change",
                "Partnership",
            ]),
            characteristics: strings(&[
                "Keeps a balanced view",
                "Trusts medicine while holding on to their own wishes",
                "Adapts flexibly as the situation develops",
                "Values communication with medical staff",
            ]),
            environment: section(
                "Suitable birth environments",
                &[
                    "General maternity clinic (the most common choice)",
                    "Clinic with LDR rooms",
                    "Clinic attached to a university perinatal service",
                ],
            ),
            medical: section(
                "Medical support model",
                &[
                    "Doctor and midwife share the care",
                    "Wishes and safety weighed together",
                    "Necessary monitoring alongside a natural course",
                    "A flexible birth plan",
                ],
            ),
            customization: "Some customization is possible; wishes are accommodated within \
                            the clinic's policies."
                .to_string(),
            suitability: "Suits standard-risk pregnancies wanting both naturalness and \
                          reassurance."
                .to_string(),
        },
        ArchetypeDetail {
            id: Archetype::SolidSupport,
            name: "Solid Support".to_string(),
            subtitle: "Medical backing as the anchor of safety".to_string(),
            description: "You put the safety of mother and child above all else and want \
                          the certainty of a full medical team behind you. You trust \
                          professional judgment and want the best birth within it."
                .to_string(),
            values: strings(&[
                "Safety of mother and child",
                "A specialist medical team",
                "Readiness for emergencies",
                "A hospital you can rely on",
            ]),
            characteristics: strings(&[
                "Puts safety first",
                "Trusts medical specialists",
                "Takes risk management seriously",
                "Wants a setup that can handle a complicated birth",
            ]),
            environment: section(
                "Suitable birth environments",
                &[
                    "University or general hospital",
                    "Perinatal medical center",
                    "Facility equipped for high-risk pregnancies",
                ],
            ),
            medical: section(
                "Medical support model",
                &[
                    "Doctor-led management",
                    "Up-to-date medical equipment",
                    "Emergency response always ready",
                    "Neonatal intensive care (NICU) on site",
                ],
            ),
            customization: "Customization is limited; safety management leads and the \
                            medical plan follows."
                .to_string(),
            suitability: "Suits high-risk or complicated pregnancies, and anyone who puts \
                          safety first."
                .to_string(),
        },
    ];

    Catalog::new(questions, details).expect("builtin catalog is valid")
}
