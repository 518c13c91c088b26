//! # Map
//!
//! Entities, their brushes, and the parallel reconstruction pass.
//!
//! Brushes share no state, so each one is reconstructed on its own rayon
//! task. Face-level failures are collected into a [`ReconstructReport`].

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::info;

use crate::brush::Brush;
use crate::error::FaceIssue;
use config::constants::GeometryConfig;

/// A map entity: key/value properties and the brushes it owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    pub properties: BTreeMap<String, String>,
    pub brushes: Vec<Brush>,
}

impl Entity {
    pub fn new(properties: BTreeMap<String, String>, brushes: Vec<Brush>) -> Self {
        Self {
            properties,
            brushes,
        }
    }

    /// Value of a property, if set.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// The `classname` property.
    pub fn classname(&self) -> Option<&str> {
        self.property("classname")
    }
}

/// Outcome of a reconstruction pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReconstructReport {
    /// Brushes processed.
    pub brushes: usize,
    /// Faces processed.
    pub faces: usize,
    /// Faces that produced a polygon.
    pub windings: usize,
    /// Faces that did not, in entity/brush/face order.
    pub issues: Vec<FaceIssue>,
}

impl ReconstructReport {
    /// Issues other than the expected unused-plane outcome.
    pub fn errors(&self) -> impl Iterator<Item = &FaceIssue> {
        self.issues.iter().filter(|i| !i.error.is_unused_plane())
    }
}

/// Every entity of a parsed map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    pub entities: Vec<Entity>,
}

impl Map {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// All brushes with their entity and brush indices.
    pub fn brushes(&self) -> impl Iterator<Item = (usize, usize, &Brush)> {
        self.entities.iter().enumerate().flat_map(|(e, entity)| {
            entity
                .brushes
                .iter()
                .enumerate()
                .map(move |(b, brush)| (e, b, brush))
        })
    }

    /// Reconstructs every brush in parallel.
    ///
    /// # Errors
    /// The first fatal issue (capacity overflow) in entity/brush order. Other
    /// brushes may already have been updated.
    pub fn reconstruct(&mut self, config: &GeometryConfig) -> Result<ReconstructReport, FaceIssue> {
        let mut work: Vec<(usize, usize, &mut Brush)> = Vec::new();
        for (e, entity) in self.entities.iter_mut().enumerate() {
            for (b, brush) in entity.brushes.iter_mut().enumerate() {
                work.push((e, b, brush));
            }
        }

        let outcomes: Vec<_> = work
            .into_par_iter()
            .map(|(e, b, brush)| {
                let result = brush.reconstruct(config);
                let faces = brush.faces().len();
                let windings = brush.windings().count();
                (e, b, faces, windings, result)
            })
            .collect();

        let mut report = ReconstructReport {
            brushes: outcomes.len(),
            ..ReconstructReport::default()
        };

        for (e, b, faces, windings, result) in outcomes {
            report.faces += faces;
            report.windings += windings;
            match result {
                Ok(rejections) => report
                    .issues
                    .extend(rejections.into_iter().map(|r| r.locate(e, b))),
                Err(fatal) => return Err(fatal.locate(e, b)),
            }
        }

        info!(
            "reconstructed {} brushes: {} of {} faces produced polygons",
            report.brushes, report.windings, report.faces
        );
        Ok(report)
    }
}
