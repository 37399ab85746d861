//! Sampler construction with the weft subscriber installed.
//!
//! Lives in its own test binary: `init_logging` installs a process-wide
//! subscriber and may only run once.

use glam::DVec3;
use weft_config::{Config, SamplerKind};
use weft_noise::{Turbulence, TurbulenceParams};

#[test]
fn test_turbulence_from_config_under_file_logging() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.sampler = SamplerKind::Gradient;
    config.table.seed = Some(9);
    config.debug.log_level = "debug".to_string();

    weft_log::init_logging(Some(dir.path()), true, Some(&config));
    assert!(weft_log::log_file_path(dir.path()).exists());

    let turbulence = Turbulence::from_config(&config).unwrap();
    assert_eq!(turbulence.params(), &TurbulenceParams::default());
    let v = turbulence.sample_3d_normalized(DVec3::new(0.5, 1.5, 2.5)).unwrap();
    assert!((0.0..=1.0).contains(&v));

    config.turbulence.octaves = 0;
    assert!(Turbulence::from_config(&config).is_err());
}
