//! Mission Parameter Definitions
//!
//! Defines the route geometry and timing knobs for the depot autonomous run.
//! Every distance, angle and deadline a phase body consumes comes from here,
//! so a run can be retuned from the parameter store without touching code.
//!
//! # Parameters
//!
//! - `SCAN_ENABLE` - Run the scan phase at all
//! - `SCAN_TIMEOUT` - Scan gate deadline in seconds
//! - `TGT_ANG_LEFT` - Turn angle toward a left sighting (degrees)
//! - `TGT_ANG_RIGHT` - Turn angle toward a center/right sighting (degrees)
//! - `GOAL_ANG_LEFT` - Cut-back angle after a left detour (degrees)
//! - `GOAL_ANG_RIGHT` - Cut-back angle after a right detour (degrees)
//! - `HOOK_CLEAR_IN` - Hook clearance drive distance (inches)
//! - `HOOK_CLEAR_TMO` - Hook clearance drive deadline (seconds)
//! - `TGT_DRIVE_IN` - Drive distance through the target mineral (inches)
//! - `TGT_DRIVE_TMO` - Target drive deadline (seconds)
//! - `NAV_TURN_TMO` - Deadline shared by the detour turns (seconds)
//! - `GOAL_LONG_IN` - Straight-in goal approach distance (inches)
//! - `GOAL_LONG_TMO` - Straight-in approach deadline (seconds)
//! - `GOAL_SIDE_IN` - Goal approach distance after a detour (inches)
//! - `GOAL_SIDE_TMO` - Detour approach deadline (seconds)
//! - `DROP_HDG_DEG` - Heading for the marker drop (degrees)
//! - `DROP_TURN_TMO` - Drop alignment turn deadline (seconds)
//! - `PARK_LINE_DEG` - Heading onto the parking line (degrees)
//! - `PARK_LINE_TMO` - Parking line turn deadline (seconds)
//! - `PARK_DRIVE_IN` - Parking drive distance (inches)
//! - `PARK_HDG_DEG` - Heading held during the parking drive (degrees)
//! - `PARK_DRIVE_TMO` - Parking drive deadline (seconds)
//! - `LIFT_TMO` - Lift lowering deadline (seconds)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

// --- Defaults ---

const DEFAULT_SCAN_ENABLE: bool = true;
const DEFAULT_SCAN_TIMEOUT: f32 = 5.0;
const DEFAULT_TARGET_ANGLE_LEFT: f32 = 30.0;
const DEFAULT_TARGET_ANGLE_RIGHT: f32 = -35.0;
const DEFAULT_GOAL_ANGLE_LEFT: f32 = -30.0;
const DEFAULT_GOAL_ANGLE_RIGHT: f32 = 40.0;
const DEFAULT_HOOK_CLEAR_IN: f32 = 5.0;
const DEFAULT_HOOK_CLEAR_TIMEOUT: f32 = 1.0;
const DEFAULT_TARGET_DRIVE_IN: f32 = 23.0;
const DEFAULT_TARGET_DRIVE_TIMEOUT: f32 = 2.0;
const DEFAULT_TURN_TIMEOUT: f32 = 2.0;
const DEFAULT_GOAL_LONG_IN: f32 = 38.0;
const DEFAULT_GOAL_LONG_TIMEOUT: f32 = 1.75;
const DEFAULT_GOAL_SIDE_IN: f32 = 20.0;
const DEFAULT_GOAL_SIDE_TIMEOUT: f32 = 1.5;
const DEFAULT_DROP_HEADING: f32 = 90.0;
const DEFAULT_DROP_TURN_TIMEOUT: f32 = 2.5;
const DEFAULT_PARK_LINE_DEG: f32 = 125.0;
const DEFAULT_PARK_LINE_TIMEOUT: f32 = 2.0;
const DEFAULT_PARK_DRIVE_IN: f32 = 70.0;
const DEFAULT_PARK_HEADING: f32 = 123.0;
const DEFAULT_PARK_DRIVE_TIMEOUT: f32 = 2.5;
const DEFAULT_LIFT_TIMEOUT: f32 = 5.0;

// --- Ranges ---

const MIN_ANGLE_DEG: f32 = -180.0;
const MAX_ANGLE_DEG: f32 = 180.0;

const MIN_DISTANCE_IN: f32 = 0.0;
const MAX_DISTANCE_IN: f32 = 120.0;

const MIN_TIMEOUT_S: f32 = 0.1;
const MAX_TIMEOUT_S: f32 = 30.0;

/// Mission route parameters loaded from the parameter store
#[derive(Debug, Clone, Copy)]
pub struct MissionParams {
    /// Run the scan phase (false starts the route at the lift)
    pub scan_enable: bool,
    /// Scan gate deadline in seconds
    pub scan_timeout_s: f32,
    /// Turn angle toward a left sighting (degrees)
    pub target_angle_left_deg: f32,
    /// Turn angle toward a center or right sighting (degrees)
    pub target_angle_right_deg: f32,
    /// Cut-back angle after a left detour (degrees)
    pub goal_angle_left_deg: f32,
    /// Cut-back angle after a right detour (degrees)
    pub goal_angle_right_deg: f32,
    /// Hook clearance drive distance (inches)
    pub hook_clear_in: f32,
    /// Hook clearance drive deadline (seconds)
    pub hook_clear_timeout_s: f32,
    /// Drive distance through the target mineral (inches)
    pub target_drive_in: f32,
    /// Target drive deadline (seconds)
    pub target_drive_timeout_s: f32,
    /// Deadline shared by the detour turns (seconds)
    pub turn_timeout_s: f32,
    /// Straight-in goal approach distance (inches)
    pub goal_long_in: f32,
    /// Straight-in approach deadline (seconds)
    pub goal_long_timeout_s: f32,
    /// Goal approach distance after a detour (inches)
    pub goal_side_in: f32,
    /// Detour approach deadline (seconds)
    pub goal_side_timeout_s: f32,
    /// Heading for the marker drop (degrees)
    pub drop_heading_deg: f32,
    /// Drop alignment turn deadline (seconds)
    pub drop_turn_timeout_s: f32,
    /// Heading onto the parking line (degrees)
    pub park_line_deg: f32,
    /// Parking line turn deadline (seconds)
    pub park_line_timeout_s: f32,
    /// Parking drive distance (inches)
    pub park_drive_in: f32,
    /// Heading held during the parking drive (degrees)
    pub park_heading_deg: f32,
    /// Parking drive deadline (seconds)
    pub park_drive_timeout_s: f32,
    /// Lift lowering deadline (seconds)
    pub lift_timeout_s: f32,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            scan_enable: DEFAULT_SCAN_ENABLE,
            scan_timeout_s: DEFAULT_SCAN_TIMEOUT,
            target_angle_left_deg: DEFAULT_TARGET_ANGLE_LEFT,
            target_angle_right_deg: DEFAULT_TARGET_ANGLE_RIGHT,
            goal_angle_left_deg: DEFAULT_GOAL_ANGLE_LEFT,
            goal_angle_right_deg: DEFAULT_GOAL_ANGLE_RIGHT,
            hook_clear_in: DEFAULT_HOOK_CLEAR_IN,
            hook_clear_timeout_s: DEFAULT_HOOK_CLEAR_TIMEOUT,
            target_drive_in: DEFAULT_TARGET_DRIVE_IN,
            target_drive_timeout_s: DEFAULT_TARGET_DRIVE_TIMEOUT,
            turn_timeout_s: DEFAULT_TURN_TIMEOUT,
            goal_long_in: DEFAULT_GOAL_LONG_IN,
            goal_long_timeout_s: DEFAULT_GOAL_LONG_TIMEOUT,
            goal_side_in: DEFAULT_GOAL_SIDE_IN,
            goal_side_timeout_s: DEFAULT_GOAL_SIDE_TIMEOUT,
            drop_heading_deg: DEFAULT_DROP_HEADING,
            drop_turn_timeout_s: DEFAULT_DROP_TURN_TIMEOUT,
            park_line_deg: DEFAULT_PARK_LINE_DEG,
            park_line_timeout_s: DEFAULT_PARK_LINE_TIMEOUT,
            park_drive_in: DEFAULT_PARK_DRIVE_IN,
            park_heading_deg: DEFAULT_PARK_HEADING,
            park_drive_timeout_s: DEFAULT_PARK_DRIVE_TIMEOUT,
            lift_timeout_s: DEFAULT_LIFT_TIMEOUT,
        }
    }
}

impl MissionParams {
    /// Register mission parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "SCAN_ENABLE",
            ParamValue::Bool(DEFAULT_SCAN_ENABLE),
            ParamFlags::empty(),
        )?;
        store.register(
            "SCAN_TIMEOUT",
            ParamValue::Float(DEFAULT_SCAN_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "TGT_ANG_LEFT",
            ParamValue::Float(DEFAULT_TARGET_ANGLE_LEFT),
            ParamFlags::empty(),
        )?;
        store.register(
            "TGT_ANG_RIGHT",
            ParamValue::Float(DEFAULT_TARGET_ANGLE_RIGHT),
            ParamFlags::empty(),
        )?;
        store.register(
            "GOAL_ANG_LEFT",
            ParamValue::Float(DEFAULT_GOAL_ANGLE_LEFT),
            ParamFlags::empty(),
        )?;
        store.register(
            "GOAL_ANG_RIGHT",
            ParamValue::Float(DEFAULT_GOAL_ANGLE_RIGHT),
            ParamFlags::empty(),
        )?;
        store.register(
            "HOOK_CLEAR_IN",
            ParamValue::Float(DEFAULT_HOOK_CLEAR_IN),
            ParamFlags::empty(),
        )?;
        store.register(
            "HOOK_CLEAR_TMO",
            ParamValue::Float(DEFAULT_HOOK_CLEAR_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "TGT_DRIVE_IN",
            ParamValue::Float(DEFAULT_TARGET_DRIVE_IN),
            ParamFlags::empty(),
        )?;
        store.register(
            "TGT_DRIVE_TMO",
            ParamValue::Float(DEFAULT_TARGET_DRIVE_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "NAV_TURN_TMO",
            ParamValue::Float(DEFAULT_TURN_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "GOAL_LONG_IN",
            ParamValue::Float(DEFAULT_GOAL_LONG_IN),
            ParamFlags::empty(),
        )?;
        store.register(
            "GOAL_LONG_TMO",
            ParamValue::Float(DEFAULT_GOAL_LONG_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "GOAL_SIDE_IN",
            ParamValue::Float(DEFAULT_GOAL_SIDE_IN),
            ParamFlags::empty(),
        )?;
        store.register(
            "GOAL_SIDE_TMO",
            ParamValue::Float(DEFAULT_GOAL_SIDE_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "DROP_HDG_DEG",
            ParamValue::Float(DEFAULT_DROP_HEADING),
            ParamFlags::empty(),
        )?;
        store.register(
            "DROP_TURN_TMO",
            ParamValue::Float(DEFAULT_DROP_TURN_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "PARK_LINE_DEG",
            ParamValue::Float(DEFAULT_PARK_LINE_DEG),
            ParamFlags::empty(),
        )?;
        store.register(
            "PARK_LINE_TMO",
            ParamValue::Float(DEFAULT_PARK_LINE_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "PARK_DRIVE_IN",
            ParamValue::Float(DEFAULT_PARK_DRIVE_IN),
            ParamFlags::empty(),
        )?;
        store.register(
            "PARK_HDG_DEG",
            ParamValue::Float(DEFAULT_PARK_HEADING),
            ParamFlags::empty(),
        )?;
        store.register(
            "PARK_DRIVE_TMO",
            ParamValue::Float(DEFAULT_PARK_DRIVE_TIMEOUT),
            ParamFlags::empty(),
        )?;
        store.register(
            "LIFT_TMO",
            ParamValue::Float(DEFAULT_LIFT_TIMEOUT),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load mission parameters from the parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            scan_enable: load_bool(store, "SCAN_ENABLE", DEFAULT_SCAN_ENABLE),
            scan_timeout_s: load_float(
                store,
                "SCAN_TIMEOUT",
                DEFAULT_SCAN_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            target_angle_left_deg: load_float(
                store,
                "TGT_ANG_LEFT",
                DEFAULT_TARGET_ANGLE_LEFT,
                MIN_ANGLE_DEG,
                MAX_ANGLE_DEG,
            ),
            target_angle_right_deg: load_float(
                store,
                "TGT_ANG_RIGHT",
                DEFAULT_TARGET_ANGLE_RIGHT,
                MIN_ANGLE_DEG,
                MAX_ANGLE_DEG,
            ),
            goal_angle_left_deg: load_float(
                store,
                "GOAL_ANG_LEFT",
                DEFAULT_GOAL_ANGLE_LEFT,
                MIN_ANGLE_DEG,
                MAX_ANGLE_DEG,
            ),
            goal_angle_right_deg: load_float(
                store,
                "GOAL_ANG_RIGHT",
                DEFAULT_GOAL_ANGLE_RIGHT,
                MIN_ANGLE_DEG,
                MAX_ANGLE_DEG,
            ),
            hook_clear_in: load_float(
                store,
                "HOOK_CLEAR_IN",
                DEFAULT_HOOK_CLEAR_IN,
                MIN_DISTANCE_IN,
                MAX_DISTANCE_IN,
            ),
            hook_clear_timeout_s: load_float(
                store,
                "HOOK_CLEAR_TMO",
                DEFAULT_HOOK_CLEAR_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            target_drive_in: load_float(
                store,
                "TGT_DRIVE_IN",
                DEFAULT_TARGET_DRIVE_IN,
                MIN_DISTANCE_IN,
                MAX_DISTANCE_IN,
            ),
            target_drive_timeout_s: load_float(
                store,
                "TGT_DRIVE_TMO",
                DEFAULT_TARGET_DRIVE_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            turn_timeout_s: load_float(
                store,
                "NAV_TURN_TMO",
                DEFAULT_TURN_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            goal_long_in: load_float(
                store,
                "GOAL_LONG_IN",
                DEFAULT_GOAL_LONG_IN,
                MIN_DISTANCE_IN,
                MAX_DISTANCE_IN,
            ),
            goal_long_timeout_s: load_float(
                store,
                "GOAL_LONG_TMO",
                DEFAULT_GOAL_LONG_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            goal_side_in: load_float(
                store,
                "GOAL_SIDE_IN",
                DEFAULT_GOAL_SIDE_IN,
                MIN_DISTANCE_IN,
                MAX_DISTANCE_IN,
            ),
            goal_side_timeout_s: load_float(
                store,
                "GOAL_SIDE_TMO",
                DEFAULT_GOAL_SIDE_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            drop_heading_deg: load_float(
                store,
                "DROP_HDG_DEG",
                DEFAULT_DROP_HEADING,
                MIN_ANGLE_DEG,
                MAX_ANGLE_DEG,
            ),
            drop_turn_timeout_s: load_float(
                store,
                "DROP_TURN_TMO",
                DEFAULT_DROP_TURN_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            park_line_deg: load_float(
                store,
                "PARK_LINE_DEG",
                DEFAULT_PARK_LINE_DEG,
                MIN_ANGLE_DEG,
                MAX_ANGLE_DEG,
            ),
            park_line_timeout_s: load_float(
                store,
                "PARK_LINE_TMO",
                DEFAULT_PARK_LINE_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            park_drive_in: load_float(
                store,
                "PARK_DRIVE_IN",
                DEFAULT_PARK_DRIVE_IN,
                MIN_DISTANCE_IN,
                MAX_DISTANCE_IN,
            ),
            park_heading_deg: load_float(
                store,
                "PARK_HDG_DEG",
                DEFAULT_PARK_HEADING,
                MIN_ANGLE_DEG,
                MAX_ANGLE_DEG,
            ),
            park_drive_timeout_s: load_float(
                store,
                "PARK_DRIVE_TMO",
                DEFAULT_PARK_DRIVE_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
            lift_timeout_s: load_float(
                store,
                "LIFT_TMO",
                DEFAULT_LIFT_TIMEOUT,
                MIN_TIMEOUT_S,
                MAX_TIMEOUT_S,
            ),
        }
    }

    /// Validate mission parameters
    pub fn is_valid(&self) -> bool {
        let angles = [
            self.target_angle_left_deg,
            self.target_angle_right_deg,
            self.goal_angle_left_deg,
            self.goal_angle_right_deg,
            self.drop_heading_deg,
            self.park_line_deg,
            self.park_heading_deg,
        ];
        if angles
            .iter()
            .any(|a| !(MIN_ANGLE_DEG..=MAX_ANGLE_DEG).contains(a))
        {
            return false;
        }

        let distances = [
            self.hook_clear_in,
            self.target_drive_in,
            self.goal_long_in,
            self.goal_side_in,
            self.park_drive_in,
        ];
        if distances
            .iter()
            .any(|d| !(MIN_DISTANCE_IN..=MAX_DISTANCE_IN).contains(d))
        {
            return false;
        }

        let timeouts = [
            self.scan_timeout_s,
            self.hook_clear_timeout_s,
            self.target_drive_timeout_s,
            self.turn_timeout_s,
            self.goal_long_timeout_s,
            self.goal_side_timeout_s,
            self.drop_turn_timeout_s,
            self.park_line_timeout_s,
            self.park_drive_timeout_s,
            self.lift_timeout_s,
        ];
        if timeouts
            .iter()
            .any(|t| !(MIN_TIMEOUT_S..=MAX_TIMEOUT_S).contains(t))
        {
            return false;
        }

        true
    }
}

/// Load a float parameter from store with clamping
fn load_float(store: &ParameterStore, name: &str, default: f32, min: f32, max: f32) -> f32 {
    match store.get(name) {
        Some(ParamValue::Float(v)) => v.clamp(min, max),
        Some(ParamValue::Int(v)) => (*v as f32).clamp(min, max),
        _ => default,
    }
}

/// Load a bool parameter from store, accepting integer truthiness
fn load_bool(store: &ParameterStore, name: &str, default: bool) -> bool {
    match store.get(name) {
        Some(ParamValue::Bool(v)) => *v,
        Some(ParamValue::Int(v)) => *v != 0,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_params_defaults() {
        let params = MissionParams::default();

        assert!(params.scan_enable);
        assert!((params.scan_timeout_s - 5.0).abs() < 0.001);
        assert!((params.target_angle_left_deg - 30.0).abs() < 0.001);
        assert!((params.target_angle_right_deg - (-35.0)).abs() < 0.001);
        assert!((params.goal_angle_left_deg - (-30.0)).abs() < 0.001);
        assert!((params.goal_angle_right_deg - 40.0).abs() < 0.001);
        assert!((params.hook_clear_in - 5.0).abs() < 0.001);
        assert!((params.target_drive_in - 23.0).abs() < 0.001);
        assert!((params.goal_long_in - 38.0).abs() < 0.001);
        assert!((params.goal_long_timeout_s - 1.75).abs() < 0.001);
        assert!((params.goal_side_in - 20.0).abs() < 0.001);
        assert!((params.drop_heading_deg - 90.0).abs() < 0.001);
        assert!((params.park_line_deg - 125.0).abs() < 0.001);
        assert!((params.park_drive_in - 70.0).abs() < 0.001);
        assert!((params.park_heading_deg - 123.0).abs() < 0.001);
        assert!((params.lift_timeout_s - 5.0).abs() < 0.001);
        assert!(params.is_valid());
    }

    #[test]
    fn test_register_defaults_populates_all_23() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();

        assert_eq!(store.len(), 23);
        assert!(store.get("SCAN_ENABLE").is_some());
        assert!(store.get("SCAN_TIMEOUT").is_some());
        assert!(store.get("TGT_ANG_LEFT").is_some());
        assert!(store.get("TGT_ANG_RIGHT").is_some());
        assert!(store.get("GOAL_ANG_LEFT").is_some());
        assert!(store.get("GOAL_ANG_RIGHT").is_some());
        assert!(store.get("HOOK_CLEAR_IN").is_some());
        assert!(store.get("HOOK_CLEAR_TMO").is_some());
        assert!(store.get("TGT_DRIVE_IN").is_some());
        assert!(store.get("TGT_DRIVE_TMO").is_some());
        assert!(store.get("NAV_TURN_TMO").is_some());
        assert!(store.get("GOAL_LONG_IN").is_some());
        assert!(store.get("GOAL_LONG_TMO").is_some());
        assert!(store.get("GOAL_SIDE_IN").is_some());
        assert!(store.get("GOAL_SIDE_TMO").is_some());
        assert!(store.get("DROP_HDG_DEG").is_some());
        assert!(store.get("DROP_TURN_TMO").is_some());
        assert!(store.get("PARK_LINE_DEG").is_some());
        assert!(store.get("PARK_LINE_TMO").is_some());
        assert!(store.get("PARK_DRIVE_IN").is_some());
        assert!(store.get("PARK_HDG_DEG").is_some());
        assert!(store.get("PARK_DRIVE_TMO").is_some());
        assert!(store.get("LIFT_TMO").is_some());
    }

    #[test]
    fn test_from_store_reads_defaults() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();

        let params = MissionParams::from_store(&store);
        assert!(params.scan_enable);
        assert!((params.target_angle_left_deg - 30.0).abs() < 0.001);
        assert!((params.goal_long_in - 38.0).abs() < 0.001);
        assert!((params.park_drive_in - 70.0).abs() < 0.001);
        assert!(params.is_valid());
    }

    #[test]
    fn test_from_store_reads_custom_values() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();

        store.set("SCAN_ENABLE", ParamValue::Bool(false)).unwrap();
        store.set("TGT_ANG_LEFT", ParamValue::Float(25.0)).unwrap();
        store.set("PARK_DRIVE_IN", ParamValue::Float(60.0)).unwrap();
        store.set("LIFT_TMO", ParamValue::Float(8.0)).unwrap();

        let params = MissionParams::from_store(&store);
        assert!(!params.scan_enable);
        assert!((params.target_angle_left_deg - 25.0).abs() < 0.001);
        assert!((params.park_drive_in - 60.0).abs() < 0.001);
        assert!((params.lift_timeout_s - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();

        // Angle beyond half a turn
        store.set("TGT_ANG_LEFT", ParamValue::Float(270.0)).unwrap();
        let params = MissionParams::from_store(&store);
        assert!((params.target_angle_left_deg - MAX_ANGLE_DEG).abs() < 0.001);

        // Negative distance
        store.set("GOAL_LONG_IN", ParamValue::Float(-5.0)).unwrap();
        let params = MissionParams::from_store(&store);
        assert!((params.goal_long_in - MIN_DISTANCE_IN).abs() < 0.001);

        // Timeout of zero would stall every wait
        store.set("NAV_TURN_TMO", ParamValue::Float(0.0)).unwrap();
        let params = MissionParams::from_store(&store);
        assert!((params.turn_timeout_s - MIN_TIMEOUT_S).abs() < 0.001);
    }

    #[test]
    fn test_integer_values_are_accepted() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();

        store.set("SCAN_ENABLE", ParamValue::Int(0)).unwrap();
        store.set("PARK_DRIVE_IN", ParamValue::Int(65)).unwrap();

        let params = MissionParams::from_store(&store);
        assert!(!params.scan_enable);
        assert!((params.park_drive_in - 65.0).abs() < 0.001);
    }

    #[test]
    fn test_is_valid_rejects_out_of_range() {
        let params = MissionParams {
            drop_heading_deg: 200.0,
            ..MissionParams::default()
        };
        assert!(!params.is_valid());

        let params = MissionParams {
            park_drive_in: 150.0,
            ..MissionParams::default()
        };
        assert!(!params.is_valid());

        let params = MissionParams {
            lift_timeout_s: 0.0,
            ..MissionParams::default()
        };
        assert!(!params.is_valid());
    }

    #[test]
    fn test_is_valid_rejects_nan() {
        let params = MissionParams {
            goal_long_in: f32::NAN,
            ..MissionParams::default()
        };
        assert!(!params.is_valid());
    }
}
