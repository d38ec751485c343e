//! Hand landmark layout and validated poses
//!
//! MediaPipe Hands emits 21 landmarks per hand in normalized image
//! coordinates. A `HandPose` can only be built from input that passed
//! validation, so the classifier never has to bounds-check.

use super::error::GestureError;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

/// Floats per landmark in the flat buffers sent from JS (x, y, z)
pub const LANDMARK_STRIDE: usize = 3;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertips in digit order: thumb, index, middle, ring, pinky
pub const FINGER_TIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Base joints matching `FINGER_TIPS`
pub const FINGER_BASES: [usize; 5] = [THUMB_MCP, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// Hand skeleton connections for rendering (finger chains + palm)
pub const HAND_SKELETON: [(usize, usize); 23] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized, grows downward
    pub z: f32,  // Relative depth
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One detected hand in one frame: exactly 21 validated landmarks
#[derive(Clone, Debug, PartialEq)]
pub struct HandPose {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandPose {
    /// Build a pose from a landmark slice, rejecting malformed input
    pub fn from_landmarks(points: &[Landmark]) -> Result<Self, GestureError> {
        if points.len() != LANDMARK_COUNT {
            return Err(GestureError::LandmarkCount {
                expected: LANDMARK_COUNT,
                found: points.len(),
            });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (index, point) in points.iter().enumerate() {
            validate_point(index, point)?;
            landmarks[index] = *point;
        }

        Ok(Self { landmarks })
    }

    /// Build a pose from 63 floats laid out as `[x0, y0, z0, x1, ...]`
    pub fn from_flat(data: &[f32]) -> Result<Self, GestureError> {
        if data.len() % LANDMARK_STRIDE != 0 {
            return Err(GestureError::FrameLength {
                expected: LANDMARK_COUNT * LANDMARK_STRIDE,
                found: data.len(),
            });
        }

        let points: Vec<Landmark> = data
            .chunks_exact(LANDMARK_STRIDE)
            .map(|c| Landmark::new(c[0], c[1], c[2]))
            .collect();

        Self::from_landmarks(&points)
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }
}

fn validate_point(index: usize, point: &Landmark) -> Result<(), GestureError> {
    if !point.x.is_finite() || !point.y.is_finite() || !point.z.is_finite() {
        return Err(GestureError::NonFiniteCoordinate { index });
    }

    let in_range = |v: f32| (0.0..=1.0).contains(&v);
    if !in_range(point.x) || !in_range(point.y) {
        return Err(GestureError::CoordinateOutOfRange {
            index,
            x: point.x,
            y: point.y,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered() -> Vec<Landmark> {
        vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT]
    }

    #[test]
    fn test_accepts_21_points() {
        let pose = HandPose::from_landmarks(&centered()).unwrap();
        assert_eq!(pose.landmark(WRIST), Landmark::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_rejects_short_pose() {
        let points = &centered()[..20];
        let err = HandPose::from_landmarks(points).unwrap_err();
        assert!(matches!(err, GestureError::LandmarkCount { expected: 21, found: 20 }));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut points = centered();
        points[INDEX_TIP].y = -0.1;
        let err = HandPose::from_landmarks(&points).unwrap_err();
        assert!(matches!(err, GestureError::CoordinateOutOfRange { index: INDEX_TIP, .. }));
    }

    #[test]
    fn test_rejects_nan() {
        let mut points = centered();
        points[THUMB_TIP].x = f32::NAN;
        let err = HandPose::from_landmarks(&points).unwrap_err();
        assert!(matches!(err, GestureError::NonFiniteCoordinate { index: THUMB_TIP }));
    }

    #[test]
    fn test_from_flat() {
        let mut flat = vec![0.25; LANDMARK_COUNT * LANDMARK_STRIDE];
        flat[PINKY_TIP * 3 + 1] = 0.75;
        let pose = HandPose::from_flat(&flat).unwrap();
        assert_eq!(pose.landmark(PINKY_TIP).y, 0.75);

        let err = HandPose::from_flat(&flat[..62]).unwrap_err();
        assert!(matches!(err, GestureError::FrameLength { found: 62, .. }));
    }

    #[test]
    fn test_skeleton_indices_in_bounds() {
        for (a, b) in HAND_SKELETON.iter() {
            assert!(*a < LANDMARK_COUNT && *b < LANDMARK_COUNT);
        }
    }
}
