/// Distribution file refresh orchestration.
use crate::manifest::{ARCHIVE_FILES, TEXT_FILES};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the pinned JOGL and GlueGen distribution files into a destination
/// directory. Jar archives come from the supplied jar directory, license and
/// readme text from that directory's parent.
pub struct LibraryRefresher {
    /// Distribution jar directory supplied on the command line.
    archive_dir: PathBuf,
    /// Directory holding the license and readme files.
    text_dir: PathBuf,
    /// Destination for all copied files.
    dest_dir: PathBuf,
}

impl LibraryRefresher {
    /// Create a refresher for the given jar directory.
    /// License and readme files are looked up in the jar directory's parent.
    pub fn new(archive_dir: &Path, dest_dir: &Path) -> Self {
        let text_dir = archive_dir
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        Self {
            archive_dir: archive_dir.to_path_buf(),
            text_dir,
            dest_dir: dest_dir.to_path_buf(),
        }
    }

    /// Copy every manifest file, logging each source/destination pair.
    /// A failed copy aborts the run and leaves earlier copies in place.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let total = (ARCHIVE_FILES.len() + TEXT_FILES.len()) as u64;
        println!(
            "Refreshing {} JOGL/GlueGen files into {}...",
            total,
            self.dest_dir.display()
        );

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Copying distribution files");

        self.copy_batch(&self.archive_dir, ARCHIVE_FILES, &pb)?;
        self.copy_batch(&self.text_dir, TEXT_FILES, &pb)?;

        pb.finish_with_message("Refresh complete");
        Ok(())
    }

    /// Copy one batch of manifest files out of a single source directory.
    /// Existing destination files are overwritten.
    fn copy_batch(
        &self,
        source_dir: &Path,
        names: &[&str],
        pb: &ProgressBar,
    ) -> Result<(), Box<dyn std::error::Error>> {
        for name in names {
            let source = source_dir.join(name);
            let dest = self.dest_dir.join(name);

            println!("Copying {} -> {}", source.display(), dest.display());
            fs::copy(&source, &dest)?;
            pb.inc(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lay out a scratch distribution tree: jars under jogl/jar, text files
    /// next to the jar directory. Returns the jar directory.
    fn build_distribution(root: &Path) -> PathBuf {
        let jar_dir = root.join("jogl").join("jar");
        fs::create_dir_all(&jar_dir).unwrap();

        for name in ARCHIVE_FILES {
            fs::write(jar_dir.join(name), format!("archive: {}", name)).unwrap();
        }
        for name in TEXT_FILES {
            fs::write(root.join("jogl").join(name), format!("text: {}", name)).unwrap();
        }

        jar_dir
    }

    #[test]
    fn test_refresh_copies_all_manifest_files() {
        let tmp = tempfile::tempdir().unwrap();
        let jar_dir = build_distribution(tmp.path());
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();

        LibraryRefresher::new(&jar_dir, &dest).run().unwrap();

        for name in ARCHIVE_FILES {
            let copied = fs::read(dest.join(name)).unwrap();
            assert_eq!(copied, fs::read(jar_dir.join(name)).unwrap());
        }
        for name in TEXT_FILES {
            let copied = fs::read(dest.join(name)).unwrap();
            let original = fs::read(tmp.path().join("jogl").join(name)).unwrap();
            assert_eq!(copied, original);
        }
    }

    #[test]
    fn test_refresh_overwrites_existing_destination_files() {
        let tmp = tempfile::tempdir().unwrap();
        let jar_dir = build_distribution(tmp.path());
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("jogl-all.jar"), "stale contents").unwrap();

        LibraryRefresher::new(&jar_dir, &dest).run().unwrap();

        let refreshed = fs::read_to_string(dest.join("jogl-all.jar")).unwrap();
        assert_eq!(refreshed, "archive: jogl-all.jar");
    }

    #[test]
    fn test_missing_source_aborts_but_keeps_earlier_copies() {
        let tmp = tempfile::tempdir().unwrap();
        let jar_dir = build_distribution(tmp.path());
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();

        // Drop the fifth archive so four copies land before the failure.
        fs::remove_file(jar_dir.join(ARCHIVE_FILES[4])).unwrap();

        let result = LibraryRefresher::new(&jar_dir, &dest).run();
        assert!(result.is_err());

        for name in &ARCHIVE_FILES[..4] {
            assert!(dest.join(name).exists());
        }
        for name in &ARCHIVE_FILES[4..] {
            assert!(!dest.join(name).exists());
        }
        for name in TEXT_FILES {
            assert!(!dest.join(name).exists());
        }
    }

    #[test]
    fn test_text_dir_is_parent_of_jar_dir() {
        let refresher = LibraryRefresher::new(
            Path::new("/opt/jogl/build/jar"),
            Path::new("."),
        );
        assert_eq!(refresher.text_dir, Path::new("/opt/jogl/build"));
    }
}
