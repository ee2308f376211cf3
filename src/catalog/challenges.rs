// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Water-saving challenges.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Challenge {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Liters expected to be saved on completion
    pub target_liters: u32,
    pub duration_days: u32,
    pub difficulty: Difficulty,
}

const fn challenge_entry(
    id: u32,
    name: &'static str,
    description: &'static str,
    target_liters: u32,
    duration_days: u32,
    difficulty: Difficulty,
) -> Challenge {
    Challenge {
        id,
        name,
        description,
        target_liters,
        duration_days,
        difficulty,
    }
}

pub static CHALLENGES: &[Challenge] = &[
    challenge_entry(
        1,
        "Ducha de 5 minutos",
        "Limita tus duchas a 5 minutos por día durante una semana.",
        50,
        7,
        Difficulty::Easy,
    ),
    challenge_entry(
        2,
        "Reutiliza el agua",
        "Reutiliza el agua de la lavadora para limpiar pisos o el inodoro durante 5 días.",
        100,
        5,
        Difficulty::Medium,
    ),
    challenge_entry(
        3,
        "Sin carne por una semana",
        "Reduce tu huella hídrica evitando carne por 7 días completos.",
        2000,
        7,
        Difficulty::Hard,
    ),
    challenge_entry(
        4,
        "Instala aireadores",
        "Instala aireadores en todos los grifos de tu casa y mide la diferencia.",
        300,
        14,
        Difficulty::Medium,
    ),
    challenge_entry(
        5,
        "Detector de fugas",
        "Revisa tu casa en busca de fugas y repáralas para ahorrar agua.",
        500,
        30,
        Difficulty::Hard,
    ),
    challenge_entry(
        6,
        "Riego eficiente",
        "Riega plantas y jardín solo al anochecer para evitar evaporación.",
        150,
        10,
        Difficulty::Easy,
    ),
    challenge_entry(
        7,
        "Doble descarga",
        "Instala un sistema de doble descarga en tu inodoro.",
        400,
        30,
        Difficulty::Medium,
    ),
    challenge_entry(
        8,
        "Cerrar el grifo",
        "Cierra el grifo mientras te cepillas, te afeitas o lavas platos.",
        200,
        7,
        Difficulty::Easy,
    ),
    challenge_entry(
        9,
        "Desafío extremo",
        "Mantén tu consumo diario por debajo de 80 litros durante 3 días.",
        300,
        3,
        Difficulty::Extreme,
    ),
    challenge_entry(
        10,
        "Lavado eficiente",
        "Utiliza la lavadora y lavavajillas solo con carga completa durante 2 semanas.",
        250,
        14,
        Difficulty::Medium,
    ),
];

pub fn challenge(id: u32) -> Option<&'static Challenge> {
    CHALLENGES.iter().find(|c| c.id == id)
}
