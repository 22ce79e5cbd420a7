//! Canned interpretive text for a body in a sign.
//!
//! The text is assembled from static fragments keyed by body and sign. Names
//! are folded first, so `"Vênus"`, `"venus"` and `"Venus"` hit the same entry.
//! Anything that does not resolve gets the fallback sentence
//! `"Interpretation not available for {body} in {sign}."`.

use serde::{Deserialize, Serialize};

use crate::bodies::CelestialBody;
use crate::calculator::PositionResult;
use crate::zodiac::{Element, ZodiacSign};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    #[default]
    Portuguese,
}

struct BodyContext {
    attribute: &'static str,
    theme: &'static str,
}

struct SignContext {
    quality: &'static str,
    expression: &'static str,
}

pub fn interpret_position(position: &PositionResult, language: Language) -> String {
    interpret(position.body_name, position.sign.name(), position.sign_degree, language)
}

pub fn interpret(body_name: &str, sign_name: &str, sign_degree: f64, language: Language) -> String {
    let body = CelestialBody::find(body_name);
    let sign = sign_name.parse::<ZodiacSign>().ok();

    let (body, sign, body_ctx) = match (body, sign) {
        (Some(body), Some(sign)) => match body_context(body.name, language) {
            Some(ctx) => (body, sign, ctx),
            None => return fallback(body_name, sign_name, language),
        },
        _ => return fallback(body_name, sign_name, language),
    };
    let sign_ctx = sign_context(sign, language);
    let element = sign.element();
    let decanate = ((sign_degree / 10.0).floor().clamp(0.0, 2.0)) as usize;
    let decanate_quality = decanate_quality(element, decanate, language);
    let personal = sign_degree < 15.0;

    match language {
        Language::English => {
            let half = if personal {
                "expressing itself in a more personal and direct way"
            } else {
                "manifesting in a more social and far-reaching way"
            };
            format!(
                "{} in {} ({:.2}°) indicates an expression of {} that manifests through {}. \
                 In the {} decanate it shows itself in a more {} way. \
                 This combination suggests that your {} develops in a {} manner, {}. \
                 The {} element brings a {} quality to this position.",
                body.name,
                sign.name(),
                sign_degree,
                body_ctx.attribute,
                sign_ctx.quality,
                ordinal(decanate + 1),
                decanate_quality,
                body_ctx.theme,
                sign_ctx.expression,
                half,
                element.name(),
                sign_ctx.expression,
            )
        }
        Language::Portuguese => {
            let half = if personal {
                "expressando-se de maneira mais pessoal e direta"
            } else {
                "manifestando-se de forma mais social e abrangente"
            };
            format!(
                "{} em {} ({:.2}°) indica uma expressão de {} que se manifesta através da {}. \
                 No {}º decanato, manifesta-se de forma mais {}. \
                 Esta combinação sugere que seu {} se desenvolve de maneira {}, {}. \
                 A influência do elemento {} traz uma qualidade {} para esta posição.",
                body.portuguese_name,
                sign.portuguese_name(),
                sign_degree,
                body_ctx.attribute,
                sign_ctx.quality,
                decanate + 1,
                decanate_quality,
                body_ctx.theme,
                sign_ctx.expression,
                half,
                element.portuguese_name(),
                sign_ctx.expression.to_lowercase(),
            )
        }
    }
}

/// Sentence returned when the body or the sign is not in the tables.
pub fn fallback(body_name: &str, sign_name: &str, language: Language) -> String {
    match language {
        Language::English => format!("Interpretation not available for {body_name} in {sign_name}."),
        Language::Portuguese => format!("Interpretação não disponível para {body_name} em {sign_name}."),
    }
}

fn ordinal(n: usize) -> &'static str {
    match n {
        1 => "first",
        2 => "second",
        _ => "third",
    }
}

fn body_context(name: &str, language: Language) -> Option<BodyContext> {
    let (attribute, theme) = match (name, language) {
        ("Sun", Language::English) => ("vitality and purpose", "core self and personal expression"),
        ("Sun", Language::Portuguese) => ("vitalidade e propósito", "essência do ser e expressão pessoal"),
        ("Moon", Language::English) => ("emotions and instincts", "inner world and emotional needs"),
        ("Moon", Language::Portuguese) => ("emoções e instintos", "mundo interior e necessidades emocionais"),
        ("Mercury", Language::English) => ("communication and reasoning", "way of thinking and expressing ideas"),
        ("Mercury", Language::Portuguese) => ("comunicação e raciocínio", "forma de pensar e expressar ideias"),
        ("Venus", Language::English) => ("love and values", "relationships and appreciation of beauty"),
        ("Venus", Language::Portuguese) => ("amor e valores", "relacionamentos e apreciação da beleza"),
        ("Mars", Language::English) => ("action and energy", "drive and way of acting"),
        ("Mars", Language::Portuguese) => ("ação e energia", "impulso e forma de agir"),
        ("Jupiter", Language::English) => ("expansion and wisdom", "growth and search for meaning"),
        ("Jupiter", Language::Portuguese) => ("expansão e sabedoria", "crescimento e busca por significado"),
        ("Saturn", Language::English) => ("structure and responsibility", "limits and maturity"),
        ("Saturn", Language::Portuguese) => ("estrutura e responsabilidade", "limites e maturidade"),
        ("Uranus", Language::English) => ("originality and change", "innovation and liberation"),
        ("Uranus", Language::Portuguese) => ("originalidade e mudança", "inovação e libertação"),
        ("Neptune", Language::English) => ("intuition and transcendence", "spirituality and dissolution"),
        ("Neptune", Language::Portuguese) => ("intuição e transcendência", "espiritualidade e dissolução"),
        ("Pluto", Language::English) => ("transformation and power", "regeneration and depth"),
        ("Pluto", Language::Portuguese) => ("transformação e poder", "regeneração e profundidade"),
        _ => return None,
    };
    Some(BodyContext { attribute, theme })
}

fn sign_context(sign: ZodiacSign, language: Language) -> SignContext {
    use ZodiacSign::*;
    let (quality, expression) = match language {
        Language::English => match sign {
            Aries => ("initiative and courage", "dynamic and assertive"),
            Taurus => ("stability and practicality", "steady and sensual"),
            Gemini => ("versatility and adaptability", "communicative and curious"),
            Cancer => ("sensitivity and protection", "emotional and nurturing"),
            Leo => ("creativity and self-expression", "dramatic and magnetic"),
            Virgo => ("analysis and refinement", "methodical and helpful"),
            Libra => ("harmony and balance", "diplomatic and refined"),
            Scorpio => ("intensity and depth", "penetrating and transformative"),
            Sagittarius => ("expansion and optimism", "adventurous and philosophical"),
            Capricorn => ("ambition and discipline", "prudent and determined"),
            Aquarius => ("innovation and originality", "progressive and humanitarian"),
            Pisces => ("compassion and transcendence", "intuitive and receptive"),
        },
        Language::Portuguese => match sign {
            Aries => ("iniciativa e coragem", "dinâmica e assertiva"),
            Taurus => ("estabilidade e praticidade", "constante e sensorial"),
            Gemini => ("versatilidade e adaptabilidade", "comunicativa e curiosa"),
            Cancer => ("sensibilidade e proteção", "emocional e nutridora"),
            Leo => ("criatividade e autoexpressão", "dramática e magnética"),
            Virgo => ("análise e aperfeiçoamento", "metódica e prestativa"),
            Libra => ("harmonia e equilíbrio", "diplomática e refinada"),
            Scorpio => ("intensidade e profundidade", "penetrante e transformadora"),
            Sagittarius => ("expansão e otimismo", "aventureira e filosófica"),
            Capricorn => ("ambição e disciplina", "prudente e determinada"),
            Aquarius => ("inovação e originalidade", "progressista e humanitária"),
            Pisces => ("compaixão e transcendência", "intuitiva e receptiva"),
        },
    };
    SignContext { quality, expression }
}

fn decanate_quality(element: Element, decanate: usize, language: Language) -> &'static str {
    let qualities: [&str; 3] = match (element, language) {
        (Element::Fire, Language::English) => ["pioneering", "expressive", "inspiring"],
        (Element::Earth, Language::English) => ["practical", "stable", "manifesting"],
        (Element::Air, Language::English) => ["mental", "social", "idealistic"],
        (Element::Water, Language::English) => ["emotive", "intuitive", "transcendent"],
        (Element::Fire, Language::Portuguese) => ["pioneiro", "expressivo", "inspirador"],
        (Element::Earth, Language::Portuguese) => ["prático", "estável", "manifestador"],
        (Element::Air, Language::Portuguese) => ["mental", "social", "idealista"],
        (Element::Water, Language::Portuguese) => ["emotivo", "intuitivo", "transcendente"],
    };
    qualities[decanate.min(2)]
}
