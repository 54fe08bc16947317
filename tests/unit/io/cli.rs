//! Tests for command-line parsing and the run driver

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::io::cli::{Cli, MosaicRunner};
    use photomosaic::io::configuration::{
        DEFAULT_BLOCK_SIZE, DEFAULT_OUTPUT_IMAGE, DEFAULT_TARGET_IMAGE, DEFAULT_TILE_DIRECTORY,
    };
    use std::error::Error;
    use std::path::PathBuf;

    // Tests every argument falls back to its default
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.target, PathBuf::from(DEFAULT_TARGET_IMAGE));
        assert_eq!(cli.tiles, PathBuf::from(DEFAULT_TILE_DIRECTORY));
        assert_eq!(cli.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_IMAGE));
        assert_eq!(cli.threads, None);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "photo.png",
            "--tiles",
            "library",
            "--block-size",
            "12",
            "--output",
            "result.png",
            "--threads",
            "3",
            "--quiet",
        ]);

        assert_eq!(cli.target, PathBuf::from("photo.png"));
        assert_eq!(cli.tiles, PathBuf::from("library"));
        assert_eq!(cli.block_size, 12);
        assert_eq!(cli.output, PathBuf::from("result.png"));
        assert_eq!(cli.threads, Some(3));
        assert!(!cli.should_show_progress());
    }

    // Tests short flags map to the same fields
    #[test]
    fn test_cli_parse_short_flags() {
        let cli = Cli::parse_from([
            "program", "in.jpg", "-t", "tiles", "-b", "8", "-o", "out.jpg", "-j", "2", "-q",
        ]);

        assert_eq!(cli.block_size, 8);
        assert_eq!(cli.threads, Some(2));
        assert!(cli.quiet);
    }

    // Tests a negative block size is rejected by the parser
    #[test]
    fn test_cli_rejects_negative_block_size() {
        let result = Cli::try_parse_from(["program", "--block-size", "-5"]);
        assert!(result.is_err());
    }

    // Tests a zero block size is rejected before any processing
    #[test]
    fn test_to_config_rejects_zero_block_size() {
        let cli = Cli::parse_from(["program", "--block-size", "0"]);
        assert!(matches!(
            cli.to_config(),
            Err(MosaicError::InvalidParameter {
                parameter: "block_size",
                ..
            })
        ));
    }

    // Tests the thread count is carried into the configuration
    #[test]
    fn test_to_config_threads() -> Result<(), Box<dyn Error>> {
        let cli = Cli::parse_from(["program", "-j", "4"]);
        let config = cli.to_config()?;
        assert_eq!(config.worker_threads().map(std::num::NonZeroUsize::get), Some(4));

        let zero = Cli::parse_from(["program", "-j", "0"]);
        assert!(zero.to_config().is_err());
        Ok(())
    }

    // Tests a quiet run writes the mosaic and returns its summary
    #[test]
    fn test_runner_quiet_run() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let tiles = dir.path().join("tiles");
        std::fs::create_dir(&tiles)?;
        RgbImage::from_pixel(4, 4, Rgb([0, 200, 0])).save(tiles.join("green.png"))?;
        let target = dir.path().join("target.png");
        RgbImage::from_pixel(9, 6, Rgb([10, 180, 10])).save(&target)?;
        let output = dir.path().join("mosaic.png");

        let cli = Cli::parse_from([
            PathBuf::from("program"),
            target,
            PathBuf::from("-t"),
            tiles,
            PathBuf::from("-b"),
            PathBuf::from("3"),
            PathBuf::from("-o"),
            output.clone(),
            PathBuf::from("-q"),
        ]);
        let summary = MosaicRunner::new(cli).run()?;

        assert!(output.exists());
        assert_eq!((summary.width, summary.height), (9, 6));
        assert_eq!(summary.blocks, 6);
        assert_eq!(summary.tiles_loaded, 1);
        Ok(())
    }
}
