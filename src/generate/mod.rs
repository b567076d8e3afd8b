//! Asset generation
//!
//! Builds every asset the game loads:
//! - Office tile atlas (10x10 grid, tiles 0-9 drawn)
//! - One 4x4 sprite sheet per configured character
//! - Logo (saved twice), dialog box, screenshot placeholder
//!
//! Each asset is an [`AssetJob`] that owns its own canvas from first draw
//! to save. The tile atlas goes first and a failure there stops the run;
//! the remaining jobs are independent, so their failures are logged,
//! recorded in the [`BatchReport`], and the batch carries on.

pub mod sink;
pub mod ui;

use image::DynamicImage;
use log::{error, info};
use rayon::prelude::*;
use std::path::PathBuf;

use crate::canvas::{DrawOp, GridCanvas};
use crate::config::GeneratorConfig;
use crate::constants::*;
use crate::error::AssetError;
use crate::palettes::{ColorScheme, validate_characters};
use crate::sprites::{Frame, SpriteRules};
use crate::tiles::TileRules;

pub use sink::{AssetSink, PngSink};

/// Pixel layout of the saved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba,
    Rgb,
}

#[derive(Debug, Clone)]
pub enum AssetKind {
    TileAtlas,
    SpriteSheet(ColorScheme),
    Ancillary {
        width: u32,
        height: u32,
        program: &'static [DrawOp],
    },
}

/// One asset build: what to draw and every path to save it to.
#[derive(Debug, Clone)]
pub struct AssetJob {
    pub name: String,
    pub kind: AssetKind,
    pub format: PixelFormat,
    pub targets: Vec<PathBuf>,
}

impl AssetJob {
    /// Draw the asset on a fresh canvas.
    pub fn render(&self) -> DynamicImage {
        let canvas = match &self.kind {
            AssetKind::TileAtlas => build_tile_atlas(),
            AssetKind::SpriteSheet(scheme) => build_sprite_sheet(scheme),
            AssetKind::Ancillary {
                width,
                height,
                program,
            } => build_ancillary(*width, *height, program),
        };
        let image = DynamicImage::ImageRgba8(canvas.into_image());
        match self.format {
            PixelFormat::Rgba => image,
            PixelFormat::Rgb => DynamicImage::ImageRgb8(image.to_rgb8()),
        }
    }
}

pub fn build_tile_atlas() -> GridCanvas {
    let mut canvas = GridCanvas::new(TILE_ATLAS_SIZE, TILE_ATLAS_SIZE, CELL_SIZE);
    for index in 0..canvas.cell_count() {
        TileRules::draw(&mut canvas, index);
    }
    canvas
}

pub fn build_sprite_sheet(scheme: &ColorScheme) -> GridCanvas {
    let mut canvas = GridCanvas::new(SPRITE_SHEET_SIZE, SPRITE_SHEET_SIZE, CELL_SIZE);
    for frame in Frame::all() {
        SpriteRules::draw(&mut canvas, frame, scheme);
    }
    canvas
}

pub fn build_ancillary(width: u32, height: u32, program: &[DrawOp]) -> GridCanvas {
    let mut canvas = GridCanvas::single(width, height);
    canvas.execute(0, program);
    canvas
}

/// Result of one asset build: the saved paths, or why it failed.
#[derive(Debug)]
pub struct AssetOutcome {
    pub name: String,
    pub result: Result<Vec<PathBuf>, AssetError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &AssetError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.name.as_str(), e)))
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

pub struct AssetLayoutEngine<S: AssetSink> {
    config: GeneratorConfig,
    sink: S,
}

impl<S: AssetSink> AssetLayoutEngine<S> {
    /// Character names become file names, so they are checked here no
    /// matter where the config came from.
    pub fn new(config: GeneratorConfig, sink: S) -> Result<Self, AssetError> {
        validate_characters(&config.characters)?;
        Ok(Self { config, sink })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn target(&self, relative: &str) -> PathBuf {
        self.config.output_dir.join(relative)
    }

    pub fn tile_atlas_job(&self) -> AssetJob {
        AssetJob {
            name: "office_tiles".to_string(),
            kind: AssetKind::TileAtlas,
            format: PixelFormat::Rgba,
            targets: vec![self.target(TILE_ATLAS_PATH)],
        }
    }

    pub fn character_jobs(&self) -> Vec<AssetJob> {
        self.config
            .characters
            .iter()
            .map(|character| AssetJob {
                name: character.name.clone(),
                kind: AssetKind::SpriteSheet(character.scheme()),
                format: PixelFormat::Rgba,
                targets: vec![
                    self.target(SPRITES_DIR)
                        .join(format!("{}.png", character.name)),
                ],
            })
            .collect()
    }

    pub fn ancillary_jobs(&self) -> Vec<AssetJob> {
        let ancillary = |name: &str,
                         size: (u32, u32),
                         program: &'static [DrawOp],
                         format: PixelFormat,
                         paths: &[&str]| AssetJob {
            name: name.to_string(),
            kind: AssetKind::Ancillary {
                width: size.0,
                height: size.1,
                program,
            },
            format,
            targets: paths.iter().map(|p| self.target(p)).collect(),
        };

        vec![
            ancillary("logo", LOGO_SIZE, ui::LOGO, PixelFormat::Rgba, &LOGO_PATHS),
            ancillary(
                "dialog_box",
                DIALOG_SIZE,
                ui::DIALOG_BOX,
                PixelFormat::Rgba,
                &[DIALOG_BOX_PATH],
            ),
            ancillary(
                "screenshot",
                SCREENSHOT_SIZE,
                ui::SCREENSHOT,
                PixelFormat::Rgb,
                &[SCREENSHOT_PATH],
            ),
        ]
    }

    /// Render one job and save it to each target in turn.
    pub fn run_job(&self, job: &AssetJob) -> Result<Vec<PathBuf>, AssetError> {
        let image = job.render();
        for path in &job.targets {
            self.sink.save(&image, path)?;
            info!("Created: {}", path.display());
        }
        Ok(job.targets.clone())
    }

    fn outcome(&self, job: &AssetJob) -> AssetOutcome {
        let result = self.run_job(job);
        if let Err(e) = &result {
            error!("Error generating {}: {}: {}", job.name, e.kind(), e);
        }
        AssetOutcome {
            name: job.name.clone(),
            result,
        }
    }

    /// Run independent jobs, collecting a result for each. One failure
    /// never stops the others. Report order is job order.
    pub fn run_batch(&self, jobs: &[AssetJob]) -> BatchReport {
        let outcomes: Vec<AssetOutcome> = if self.config.parallel {
            jobs.par_iter().map(|job| self.outcome(job)).collect()
        } else {
            jobs.iter().map(|job| self.outcome(job)).collect()
        };
        BatchReport { outcomes }
    }

    /// Build the full asset set. Only a tile atlas failure is fatal.
    pub fn run(&self) -> Result<BatchReport, AssetError> {
        let atlas = self.tile_atlas_job();
        let saved = self.run_job(&atlas)?;

        let mut jobs = self.character_jobs();
        jobs.extend(self.ancillary_jobs());
        let batch = self.run_batch(&jobs);

        let mut outcomes = Vec::with_capacity(batch.outcomes.len() + 1);
        outcomes.push(AssetOutcome {
            name: atlas.name,
            result: Ok(saved),
        });
        outcomes.extend(batch.outcomes);
        Ok(BatchReport { outcomes })
    }
}
