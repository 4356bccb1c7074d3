//! The shipped report content: literal chart datasets and page copy.
//!
//! Every dataset here is constructed once, inline, and never mutated or
//! fetched; the page renders exactly what ships.

use serde::{Deserialize, Serialize};

use crate::api::{
    ChartStyleSheet, build_grouped_bar_frame, build_involvement_frame, build_radar_frame,
    build_timeline_frame, palette,
};
use crate::core::{BarPoint, RadarPoint, StakeholderPoint, TimelinePoint, Viewport};
use crate::error::ChartResult;
use crate::page::{NavLink, ReportPage};
use crate::render::{RenderFrame, TextHAlign, TextPrimitive};
use crate::section::{SectionBody, SectionFrame};

/// Remote logo mark, treated as an opaque external resource: never fetched,
/// validated or cached by the engine.
pub const LOGO_URL: &str =
    "https://pr-gallery029.netlify.app/Stock_images/logo_lamuka_242.png";

const RADAR_FULL_MARK: f64 = 5.0;

/// Diagnosis radar: maturity per organizational weakness axis, on a 0–5
/// scale.
#[must_use]
pub fn diagnosis_radar_data() -> Vec<RadarPoint> {
    vec![
        RadarPoint::new("Finance", 1.0, RADAR_FULL_MARK),
        RadarPoint::new("Vie Assoc.", 2.0, RADAR_FULL_MARK),
        RadarPoint::new("Planification", 1.0, RADAR_FULL_MARK),
        RadarPoint::new("Projets", 2.0, RADAR_FULL_MARK),
        RadarPoint::new("Visibilité", 0.0, RADAR_FULL_MARK),
        RadarPoint::new("Stabilité", 3.0, RADAR_FULL_MARK),
    ]
}

/// Objectives: current situation versus improvement target, in narrative
/// priority order.
#[must_use]
pub fn objectives_bar_data() -> Vec<BarPoint> {
    vec![
        BarPoint::new("Vie Assoc", 20.0, 90.0),
        BarPoint::new("Chrono.", 10.0, 100.0),
        BarPoint::new("Compétences", 25.0, 85.0),
        BarPoint::new("Staff RH", 10.0, 100.0),
        BarPoint::new("Visibilité", 5.0, 95.0),
    ]
}

/// Stakeholder involvement weights, most involved first.
#[must_use]
pub fn stakeholder_data() -> Vec<StakeholderPoint> {
    vec![
        StakeholderPoint::new("Service RH", 5.0, palette::BLUE_900),
        StakeholderPoint::new("Membres", 3.0, palette::ORANGE_500),
        StakeholderPoint::new("Experts Ext.", 2.0, palette::SLATE_500),
        StakeholderPoint::new("Resp. Comm", 2.0, palette::PURPLE_600),
        StakeholderPoint::new("PDG", 1.0, palette::CYAN_500),
    ]
}

/// Action-plan horizons weighted by action count.
#[must_use]
pub fn timeline_data() -> Vec<TimelinePoint> {
    vec![
        TimelinePoint::new("Court Terme (1-2 Mois)", 4.0, palette::ORANGE_500),
        TimelinePoint::new("Moyen Terme (6 Mois)", 1.0, palette::CYAN_500),
        TimelinePoint::new("Long Terme (12 Mois)", 2.0, palette::BLUE_900),
    ]
}

/// Fixed in-page navigation links, in bar order.
#[must_use]
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("context", "Philosophie"),
        NavLink::new("diagnosis", "Diagnostic"),
        NavLink::new("objectives", "Objectifs"),
        NavLink::new("action-plan", "Plan d'Action"),
    ]
}

/// Hero header copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub badge: String,
    pub title: String,
    pub title_highlight: String,
    pub tagline: String,
    pub quote: String,
}

#[must_use]
pub fn hero_copy() -> HeroCopy {
    HeroCopy {
        badge: "Rapport Stratégique & Plan d'Action".to_owned(),
        title: "Collectif".to_owned(),
        title_highlight: "LAMUKA".to_owned(),
        tagline: "Formation Atelier Vision • 26 Novembre 2025".to_owned(),
        quote: "\"L'absence de financement est une conséquence, pas une cause. \
                L'amélioration interne est la clé.\""
            .to_owned(),
    }
}

/// One card of the change-philosophy triptych.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilosophyCard {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[must_use]
pub fn philosophy_cards() -> Vec<PhilosophyCard> {
    vec![
        PhilosophyCard {
            step: "01".to_owned(),
            title: "Consultation".to_owned(),
            description: "Identifier les 'douleurs' de l'organisation. Comprendre que les \
                          pratiques actuelles bloquent l'accès aux partenaires."
                .to_owned(),
        },
        PhilosophyCard {
            step: "02".to_owned(),
            title: "Diagnostic".to_owned(),
            description: "Analyser les causes profondes. Le manque de financement est un \
                          symptôme d'un manque de gestion et d'activités."
                .to_owned(),
        },
        PhilosophyCard {
            step: "03".to_owned(),
            title: "Prescription".to_owned(),
            description: "Un plan d'action strict et planifiable. Une discipline rigoureuse \
                          pour garantir la 'guérison' (le succès)."
                .to_owned(),
        },
    ]
}

/// One entry of the fragility-zones list beside the diagnosis radar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragilityItem {
    pub title: String,
    pub description: String,
}

#[must_use]
pub fn fragility_items() -> Vec<FragilityItem> {
    vec![
        FragilityItem {
            title: "Gestion Financière".to_owned(),
            description: "Absence de gestionnaire qualifié et méconnaissance budgétaire."
                .to_owned(),
        },
        FragilityItem {
            title: "Opérationnel".to_owned(),
            description: "Membres instables ('épargés') et absence de chronogramme annuel."
                .to_owned(),
        },
        FragilityItem {
            title: "Ancrage & Visibilité".to_owned(),
            description: "Invisible sur le terrain et sur le web (Pas de Google Maps, pas de \
                          site)."
                .to_owned(),
        },
    ]
}

/// Tag strip under the objectives chart, one tag per category.
#[must_use]
pub fn objective_tags() -> Vec<String> {
    vec![
        "Vie Associative".to_owned(),
        "Chronogramme".to_owned(),
        "Compétences".to_owned(),
        "Staff RH".to_owned(),
        "Visibilité".to_owned(),
    ]
}

/// Footer copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterCopy {
    pub tagline: String,
    pub credit: String,
}

#[must_use]
pub fn footer_copy() -> FooterCopy {
    FooterCopy {
        tagline: "Projet SIÈGE • Collectif LAMUKA.".to_owned(),
        credit: "Designed by POWERFUL REACH © 2025".to_owned(),
    }
}

/// One milestone of the operational roadmap strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapMilestone {
    pub horizon: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[must_use]
pub fn roadmap_milestones() -> Vec<RoadmapMilestone> {
    vec![
        RoadmapMilestone {
            horizon: "1 Mois".to_owned(),
            title: "Restructuration Immédiate".to_owned(),
            subtitle: "Priorité Absolue".to_owned(),
            description: "Élaboration fiches de poste, Désignation staff qualifié, \
                          Référencement Google Map."
                .to_owned(),
        },
        RoadmapMilestone {
            horizon: "2 Mois".to_owned(),
            title: "Visibilité Physique".to_owned(),
            subtitle: "Ancrage Local".to_owned(),
            description: "Conception et installation de la maquette pancarte. \
                          Matérialiser l'existence."
                .to_owned(),
        },
        RoadmapMilestone {
            horizon: "6 Mois".to_owned(),
            title: "Culture Associative".to_owned(),
            subtitle: "Formation".to_owned(),
            description: "Session de formation intensive sur la vie associative pour tous \
                          les membres."
                .to_owned(),
        },
        RoadmapMilestone {
            horizon: "1 An".to_owned(),
            title: "Expertise & Digital".to_owned(),
            subtitle: "Long Terme".to_owned(),
            description: "Formation rédaction projets, mise en place Suivi-Évaluation & \
                          Site Web."
                .to_owned(),
        },
    ]
}

/// Section body rendering the diagnosis radar.
#[derive(Debug, Clone)]
pub struct DiagnosisRadarBody {
    points: Vec<RadarPoint>,
    styles: ChartStyleSheet,
}

impl SectionBody for DiagnosisRadarBody {
    fn render(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        Ok(build_radar_frame(&self.points, viewport, &self.styles.radar)?.frame)
    }
}

/// Section body rendering the objectives grouped bars.
#[derive(Debug, Clone)]
pub struct ObjectivesBody {
    points: Vec<BarPoint>,
    styles: ChartStyleSheet,
}

impl SectionBody for ObjectivesBody {
    fn render(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        Ok(build_grouped_bar_frame(&self.points, viewport, &self.styles.bars)?.frame)
    }
}

/// Section body composing the stakeholder and timeline charts side by side.
#[derive(Debug, Clone)]
pub struct ActionPlanBody {
    stakeholders: Vec<StakeholderPoint>,
    timeline: Vec<TimelinePoint>,
    styles: ChartStyleSheet,
}

impl SectionBody for ActionPlanBody {
    fn render(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        let half = Viewport::new((viewport.width / 2).max(1), viewport.height);

        let left = build_involvement_frame(&self.stakeholders, half, &self.styles.involvement)?;
        let mut right = build_timeline_frame(&self.timeline, half, &self.styles.timeline)?.frame;
        right.translate(f64::from(half.width), 0.0);

        let mut frame = RenderFrame::new(viewport);
        frame.extend_from(left.frame);
        frame.extend_from(right);
        frame.validate()?;
        Ok(frame)
    }
}

/// Section body for the philosophy cards; static text, no chart.
#[derive(Debug, Clone)]
pub struct PhilosophyBody {
    cards: Vec<PhilosophyCard>,
}

impl SectionBody for PhilosophyBody {
    fn render(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(viewport);
        if self.cards.is_empty() {
            return Ok(frame);
        }

        let card_width = f64::from(viewport.width) / self.cards.len() as f64;
        for (index, card) in self.cards.iter().enumerate() {
            let x = card_width * (index as f64 + 0.5);
            frame.texts.push(TextPrimitive::new(
                card.step.clone(),
                x,
                24.0,
                14.0,
                palette::SLATE_400,
                TextHAlign::Center,
            ));
            frame.texts.push(TextPrimitive::new(
                card.title.clone(),
                x,
                48.0,
                18.0,
                palette::BLUE_900,
                TextHAlign::Center,
            ));
            frame.texts.push(TextPrimitive::new(
                card.description.clone(),
                x,
                80.0,
                12.0,
                palette::SLATE_600,
                TextHAlign::Center,
            ));
        }
        frame.validate()?;
        Ok(frame)
    }
}

/// Assembles the full report page: nav links plus the four anchored
/// sections in narrative order, each with its heading chrome and body.
#[must_use]
pub fn build_report_page() -> ReportPage {
    let styles = ChartStyleSheet::default();

    ReportPage::new()
        .with_links(nav_links())
        .with_section(
            SectionFrame::new(
                "context",
                "Philosophie du Changement",
                palette::BLUE_900,
                Box::new(PhilosophyBody {
                    cards: philosophy_cards(),
                }),
            )
            .with_subtitle(
                "Approche médicale pour résoudre les problèmes structurels du projet SIÈGE.",
            )
            .with_icon("stethoscope"),
        )
        .with_section(
            SectionFrame::new(
                "diagnosis",
                "Diagnostic des Faiblesses",
                palette::ORANGE_500,
                Box::new(DiagnosisRadarBody {
                    points: diagnosis_radar_data(),
                    styles: styles.clone(),
                }),
            )
            .with_subtitle("Analyse radar des axes critiques de défaillance organisationnelle.")
            .with_icon("activity"),
        )
        .with_section(
            SectionFrame::new(
                "objectives",
                "Objectifs & Écarts",
                palette::BLUE_900,
                Box::new(ObjectivesBody {
                    points: objectives_bar_data(),
                    styles: styles.clone(),
                }),
            )
            .with_subtitle(
                "Visualisation du chemin à parcourir entre la situation actuelle et la cible.",
            )
            .with_icon("target"),
        )
        .with_section(
            SectionFrame::new(
                "action-plan",
                "Analyse du Plan d'Action",
                palette::CYAN_500,
                Box::new(ActionPlanBody {
                    stakeholders: stakeholder_data(),
                    timeline: timeline_data(),
                    styles,
                }),
            )
            .with_subtitle("Répartition de la charge de travail et temporalité.")
            .with_icon("clipboard-check"),
        )
}
