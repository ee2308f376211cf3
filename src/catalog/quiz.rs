// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quiz question bank, asked in order.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: &'static str,
    pub explanation: &'static str,
}

pub static QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "¿Qué porcentaje del agua en la Tierra es agua dulce accesible para consumo humano?",
        options: ["3%", "0.5%", "10%", "25%"],
        correct_answer: "0.5%",
        explanation: "Aunque el 3% del agua de la Tierra es dulce, la mayor parte está en glaciares y solo aproximadamente el 0.5% es accesible para consumo humano.",
    },
    QuizQuestion {
        question: "¿Cuánta agua se necesita para producir una hamburguesa de res?",
        options: ["500 litros", "1,000 litros", "2,400 litros", "3,000 litros"],
        correct_answer: "2,400 litros",
        explanation: "Se necesitan aproximadamente 2,400 litros de agua para producir una hamburguesa de 150g, principalmente debido al agua necesaria para criar al ganado.",
    },
    QuizQuestion {
        question: "¿Cuál de estas actividades consume más agua en un hogar promedio?",
        options: ["Lavar platos a mano", "Usar el inodoro", "Ducharse", "Lavar ropa"],
        correct_answer: "Ducharse",
        explanation: "La ducha es típicamente la actividad que más agua consume en un hogar promedio, especialmente si las duchas son largas.",
    },
    QuizQuestion {
        question: "¿Cuánta agua puede ahorrar un grifo que gotea si se repara?",
        options: [
            "Hasta 5 litros al día",
            "Hasta 20 litros al día",
            "Hasta 100 litros al día",
            "Hasta 300 litros al día",
        ],
        correct_answer: "Hasta 100 litros al día",
        explanation: "Un grifo con fuga constante puede desperdiciar entre 20 y 100 litros de agua al día, dependiendo de la velocidad del goteo.",
    },
    QuizQuestion {
        question: "¿Qué país tiene la mayor huella hídrica per cápita del mundo?",
        options: ["Estados Unidos", "China", "India", "Brasil"],
        correct_answer: "Estados Unidos",
        explanation: "Estados Unidos tiene la mayor huella hídrica per cápita, en gran parte debido a su alto consumo de bienes que requieren mucha agua para producirse.",
    },
    QuizQuestion {
        question: "¿Cuánto tiempo puede sobrevivir una persona sin agua?",
        options: ["1-2 días", "3-4 días", "7-10 días", "2 semanas"],
        correct_answer: "3-4 días",
        explanation: "Aunque varía según el clima y la condición física, una persona generalmente no puede sobrevivir más de 3-4 días sin agua.",
    },
    QuizQuestion {
        question: "¿Qué porcentaje del agua dulce disponible se usa en la agricultura globalmente?",
        options: ["30%", "50%", "70%", "90%"],
        correct_answer: "70%",
        explanation: "Aproximadamente el 70% del agua dulce disponible se utiliza en la agricultura para el riego de cultivos.",
    },
    QuizQuestion {
        question: "¿Cuánta agua usa una ducha de 10 minutos?",
        options: ["20-40 litros", "60-80 litros", "100-150 litros", "200-250 litros"],
        correct_answer: "100-150 litros",
        explanation: "Una ducha típica usa entre 10-15 litros por minuto, por lo que una ducha de 10 minutos consume entre 100-150 litros.",
    },
    QuizQuestion {
        question: "¿Qué medida ahorra más agua?",
        options: [
            "Cerrar el grifo al cepillarse",
            "Usar lavadora con carga completa",
            "Reducir ducha 5 minutos",
            "Reparar fugas",
        ],
        correct_answer: "Reducir ducha 5 minutos",
        explanation: "Aunque todas ahorran agua, reducir la ducha en 5 minutos ahorra aproximadamente 75 litros, lo que suele ser más que las otras opciones.",
    },
    QuizQuestion {
        question: "¿Cuál es la recomendación diaria de consumo de agua por persona según la ONU?",
        options: ["20 litros", "50 litros", "100 litros", "150 litros"],
        correct_answer: "50 litros",
        explanation: "La ONU recomienda un mínimo de 50 litros de agua por persona al día para cubrir necesidades básicas de higiene y consumo.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answer_is_an_option() {
        for q in QUIZ_QUESTIONS {
            assert!(
                q.options.contains(&q.correct_answer),
                "answer missing from options: {}",
                q.question
            );
        }
    }
}
