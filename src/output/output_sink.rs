use std::fs::{create_dir_all, remove_file, write};
use std::path::PathBuf;

use csv::Writer;
use serde::Serialize;
use tracing::{debug, info};

use crate::charts::{render_png, Figure};
use crate::output::{ChartViewer, OutputError};

pub const IMAGE_EXTENSION: &str = "png";

/// Single destination directory for every artifact of a run.
///
/// All writes overwrite files of the same name; there is no versioning.
pub struct OutputSink {
    directory: PathBuf,
    viewer: ChartViewer
}

impl OutputSink {
    /// Ensures `directory` exists, creating it (and any parents) when absent.
    ///
    /// # Errors
    /// Returns `OutputError::CreateDirectory` with the offending path if the directory cannot be created.
    pub fn create(directory: impl Into<PathBuf>, viewer: ChartViewer) -> Result<Self, OutputError> {
        let directory = directory.into();

        create_dir_all(&directory).map_err(|source| OutputError::CreateDirectory {
            path: directory.clone(),
            source
        })?;

        debug!("Output directory ready at {} (viewer enabled: {})", directory.display(), viewer.is_enabled());

        Ok(Self { directory, viewer })
    }

    #[cfg(test)]
    pub fn directory(&self) -> &std::path::Path {
        &self.directory
    }

    /// Writes `content` as UTF-8 to `filename` inside the output directory.
    pub fn persist_text(&self, content: &str, filename: &str) -> Result<PathBuf, OutputError> {
        let path = self.directory.join(filename);

        write(&path, content).map_err(|source| OutputError::WriteFile {
            path: path.clone(),
            source
        })?;

        info!("Saved {} ({} bytes)", path.display(), content.len());

        Ok(path)
    }

    /// Renders `figure` to `<stem>.png` and hands the file to the viewer.
    pub fn persist_image(&self, figure: &Figure, stem: &str) -> Result<PathBuf, OutputError> {
        let filename = format!("{stem}.{IMAGE_EXTENSION}");

        if figure.panels.is_empty() {
            return Err(OutputError::EmptyFigure { filename });
        }

        let path = self.directory.join(&filename);

        if let Err(error) = render_png(figure, &path) {
            //NOTE: the bitmap backend flushes on drop, so a failed render can still leave a half-drawn file
            if remove_file(&path).is_ok() {
                debug!("Removed partial chart {}", path.display());
            }

            return Err(OutputError::RenderChart { path, message: format!("{error:#}") });
        }

        info!("Saved {} ({}x{})", path.display(), figure.width, figure.height);

        self.viewer.show(&path);

        Ok(path)
    }

    /// Writes serializable rows as a CSV table with a header row.
    pub fn persist_table<T: Serialize>(&self, rows: &[T], filename: &str) -> Result<PathBuf, OutputError> {
        let path = self.directory.join(filename);
        let table_error = |source| OutputError::WriteTable { path: path.clone(), source };

        let mut writer = Writer::from_path(&path).map_err(table_error)?;

        for row in rows {
            writer.serialize(row).map_err(table_error)?;
        }

        writer.flush().map_err(|source| OutputError::WriteFile {
            path: path.clone(),
            source
        })?;

        info!("Saved {} ({} rows)", path.display(), rows.len());

        Ok(path)
    }
}
