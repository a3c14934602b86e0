//! End-to-end integration tests for the pmt CLI
//!
//! Commands are executed through the library interface against the sample
//! project or small variants of it.
//!
//! Tests are organized into modules:
//! - `timeline` - connector states across groups
//! - `progress` - ring geometry output
//! - `layout` - row placements
//! - `check` - time-code contiguity

mod common;

use common::*;
use projectmgt_core::CoreError;
use serde_json::Value;

fn json(output: &str) -> Value {
    serde_json::from_str(output).unwrap()
}

// =============================================================================
// TIMELINE TESTS
// =============================================================================

mod timeline {
    use super::*;

    fn connectors(value: &Value) -> Vec<(String, String)> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|row| {
                (
                    row["top"].as_str().unwrap().to_string(),
                    row["bottom"].as_str().unwrap().to_string(),
                )
            })
            .collect()
    }

    fn pair(top: &str, bottom: &str) -> (String, String) {
        (top.to_string(), bottom.to_string())
    }

    #[test]
    fn test_sample_project_connectors() {
        let output = timeline_cmd(true).execute(&sample_context()).unwrap();
        let rows = connectors(&json(&output));
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], pair("undefined", "connected"));
        assert_eq!(rows[1], pair("connected", "disconnected"));
        assert_eq!(rows[2], pair("disconnected", "connected"));
        assert_eq!(rows[6], pair("disconnected", "connected"));
        assert_eq!(rows[7], pair("connected", "undefined"));
    }

    #[test]
    fn test_single_task_is_undefined_both_ways() {
        let ctx = context_with(project_with_time_codes(&["24.19"]));
        let output = timeline_cmd(true).execute(&ctx).unwrap();
        assert_eq!(connectors(&json(&output)), vec![pair("undefined", "undefined")]);
    }

    #[test]
    fn test_group_of_three() {
        let ctx = context_with(project_with_time_codes(&["1", "1", "1"]));
        let output = timeline_cmd(true).execute(&ctx).unwrap();
        assert_eq!(
            connectors(&json(&output)),
            vec![
                pair("undefined", "connected"),
                pair("connected", "connected"),
                pair("connected", "undefined"),
            ]
        );
    }

    #[test]
    fn test_all_distinct_time_codes() {
        let ctx = context_with(project_with_time_codes(&["1", "2", "3"]));
        let output = timeline_cmd(true).execute(&ctx).unwrap();
        assert_eq!(
            connectors(&json(&output)),
            vec![
                pair("undefined", "disconnected"),
                pair("disconnected", "disconnected"),
                pair("disconnected", "undefined"),
            ]
        );
    }

    #[test]
    fn test_empty_project_table() {
        let ctx = context_with(project_with_time_codes(&[]));
        let output = timeline_cmd(false).execute(&ctx).unwrap();
        assert_eq!(output, "No tasks found.");
    }

    #[test]
    fn test_table_lists_every_task() {
        let output = timeline_cmd(false).execute(&sample_context()).unwrap();
        // Header, separator and one line per task
        assert_eq!(output.lines().count(), 10);
    }
}

// =============================================================================
// PROGRESS TESTS
// =============================================================================

mod progress {
    use super::*;

    fn approx(value: &Value, expected: f64) -> bool {
        (value.as_f64().unwrap() - expected).abs() < 1e-3
    }

    #[test]
    fn test_sample_progress_arcs() {
        let output = progress_cmd(Some(100.0), Some(10.0))
            .execute(&sample_context())
            .unwrap();
        let value = json(&output);
        let filled = &value["filled"];
        assert!(approx(&filled["start_angle"], 270.0));
        assert!(approx(&filled["sweep_angle"], 306.0));
        assert!(approx(&filled["diameter"], 90.0));
        assert!(approx(&filled["top_left"]["x"], 5.0));

        let remainder = &value["remainder"];
        assert!(approx(&remainder["start_angle"], 216.0));
        assert!(approx(&remainder["sweep_angle"], 54.0));
    }

    #[test]
    fn test_zero_progress() {
        let mut ctx = sample_context();
        ctx.project.progress = 0.0;
        let value = json(&progress_cmd(None, None).execute(&ctx).unwrap());
        assert!(approx(&value["filled"]["sweep_angle"], 0.0));
        assert!(approx(&value["remainder"]["sweep_angle"], 360.0));
    }

    #[test]
    fn test_progress_above_one_is_clamped() {
        let mut ctx = sample_context();
        ctx.project.progress = 1.7;
        let value = json(&progress_cmd(None, None).execute(&ctx).unwrap());
        assert!(approx(&value["filled"]["sweep_angle"], 360.0));
        assert!(value["remainder"].is_null());
    }

    #[test]
    fn test_stroke_wider_than_ring() {
        let value = json(
            &progress_cmd(Some(4.0), Some(10.0))
                .execute(&sample_context())
                .unwrap(),
        );
        assert!(approx(&value["filled"]["diameter"], 0.0));
    }
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

mod layout {
    use super::*;

    #[test]
    fn test_row_fills_container() {
        let value = json(&layout_cmd(80, 12, 7).execute(&sample_context()).unwrap());
        assert_eq!(value["size"]["width"], 80);
        assert_eq!(value["size"]["height"], 7);
        assert_eq!(value["gutter"]["size"]["width"], 12);
        assert_eq!(value["gutter"]["size"]["height"], 7);
        assert_eq!(value["main"]["position"]["x"], 12);
        assert_eq!(value["main_constraints"]["max_width"], 68);
    }

    #[test]
    fn test_gutter_wider_than_container() {
        let value = json(&layout_cmd(6, 12, 7).execute(&sample_context()).unwrap());
        assert_eq!(value["main_constraints"]["max_width"], 0);
        assert_eq!(value["main"]["size"]["width"], 0);
    }

    #[test]
    fn test_zero_height_row() {
        let value = json(&layout_cmd(40, 10, 0).execute(&sample_context()).unwrap());
        assert_eq!(value["size"]["height"], 0);
        assert_eq!(value["gutter"]["size"]["height"], 0);
    }
}

// =============================================================================
// CHECK TESTS
// =============================================================================

mod check {
    use super::*;

    #[test]
    fn test_sample_project_is_contiguous() {
        assert!(check_cmd().execute(&sample_context()).is_ok());
    }

    #[test]
    fn test_scattered_group_is_reported() {
        let ctx = context_with(project_with_time_codes(&["a", "b", "a"]));
        match check_cmd().execute(&ctx) {
            Err(CoreError::ScatteredTimeCode {
                time_code,
                first_index,
                index,
            }) => {
                assert_eq!(time_code, "a");
                assert_eq!(first_index, 0);
                assert_eq!(index, 2);
            }
            other => panic!("expected ScatteredTimeCode, got {:?}", other),
        }
    }

    #[test]
    fn test_scattered_group_error_message() {
        let ctx = context_with(project_with_time_codes(&["a", "b", "a"]));
        let err = check_cmd().execute(&ctx).unwrap_err();
        assert!(err.full_message().contains("'a'"));
    }
}
