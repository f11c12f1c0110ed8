//! The entry points write to one process-wide registry, so everything that
//! touches it lives in a single test.

use qstyles::theme::GRID_KEY;
use qstyles::{apply_theme, dark_theme, light_theme, rc_params, Error, StyleDict, StyleValue, ThemeOptions};

#[test]
fn entry_points_update_global_registry() {
    rc_params().clear();

    light_theme(&ThemeOptions::default().with_palette("cat_bright")).unwrap();
    assert_eq!(rc_params().get("axes.facecolor"), Some(&StyleValue::color("white")));
    assert_eq!(rc_params().get(GRID_KEY), Some(&StyleValue::Bool(true)));

    dark_theme(&ThemeOptions::default().with_grid(false)).unwrap();
    assert_eq!(rc_params().get("axes.facecolor"), Some(&StyleValue::color("#25272C")));
    assert_eq!(rc_params().get(GRID_KEY), Some(&StyleValue::Bool(false)));

    let before = rc_params().len();
    let err = light_theme(&ThemeOptions::default().with_palette("nope")).unwrap_err();
    assert!(matches!(err, Error::UnknownPalette(_)));
    assert_eq!(rc_params().get("axes.facecolor"), Some(&StyleValue::color("#25272C")));
    assert_eq!(rc_params().len(), before);

    apply_theme(&StyleDict::new().with("lines.linewidth", 3.0)).unwrap();
    assert_eq!(rc_params().get("lines.linewidth"), Some(&StyleValue::Float(3.0)));
}
