//! Phase wheel: the circular layout of the cycle.
//!
//! Ring phases sit on a circle at fixed angles; requirements management sits
//! at the hub. Angles are in degrees, measured clockwise from the positive x
//! axis in screen coordinates (y grows downward), so −90° is straight up.

use serde::Serialize;

use crate::catalog;

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A phase's fixed place on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSlot {
    pub phase_id: &'static str,

    /// Label drawn on the node. Both C phases read "C" here.
    pub label: &'static str,

    pub angle_degrees: f64,

    /// Hex colour of the node.
    pub color: &'static str,
}

/// Ring slots: ten phases from −90° to 234° in 36° steps.
pub const RING: [WheelSlot; 10] = [
    slot("preliminary", "P", -90.0, "#1A2B48"),
    slot("phase-a", "A", -54.0, "#1E3A5F"),
    slot("phase-b", "B", -18.0, "#2563EB"),
    slot("phase-c-is", "C", 18.0, "#3B82F6"),
    slot("phase-c-app", "C", 54.0, "#0EA5E9"),
    slot("phase-d", "D", 90.0, "#00BCD4"),
    slot("phase-e", "E", 126.0, "#14B8A6"),
    slot("phase-f", "F", 162.0, "#10B981"),
    slot("phase-g", "G", 198.0, "#D4AF37"),
    slot("phase-h", "H", 234.0, "#F59E0B"),
];

/// The hub slot. Its angle is ignored; it is drawn at the centre.
pub const HUB: WheelSlot = slot("requirements-management", "RM", 0.0, "#00BCD4");

const fn slot(
    phase_id: &'static str,
    label: &'static str,
    angle_degrees: f64,
    color: &'static str,
) -> WheelSlot {
    WheelSlot {
        phase_id,
        label,
        angle_degrees,
        color,
    }
}

/// A laid-out node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelNode {
    pub phase_id: &'static str,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
}

impl WheelNode {
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Place each slot on a circle of `radius` around `center`.
///
/// Pure: the same inputs always give bit-identical output.
#[must_use]
pub fn layout(slots: &[WheelSlot], radius: f64, center: Point) -> Vec<WheelNode> {
    slots
        .iter()
        .map(|slot| {
            let theta = slot.angle_degrees.to_radians();
            WheelNode {
                phase_id: slot.phase_id,
                label: slot.label,
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        })
        .collect()
}

/// Wheel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub radius: f64,
    pub center: Point,

    /// Hit radius of a ring node.
    pub node_radius: f64,

    /// Hit radius of the hub.
    pub hub_radius: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            radius: 140.0,
            center: Point::new(180.0, 180.0),
            node_radius: 26.0,
            hub_radius: 42.0,
        }
    }
}

/// Summary of a phase for the hover panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseDetail {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub steps: usize,
    pub deliverables: usize,
    pub artifacts: usize,
}

/// The standard wheel at a given geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    geometry: Geometry,
    ring: Vec<WheelNode>,
}

impl Wheel {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        let ring = layout(&RING, geometry.radius, geometry.center);
        Self { geometry, ring }
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The ring nodes in cycle order.
    #[must_use]
    pub fn ring(&self) -> &[WheelNode] {
        &self.ring
    }

    /// The hub node, at the literal centre.
    #[must_use]
    pub fn hub(&self) -> WheelNode {
        WheelNode {
            phase_id: HUB.phase_id,
            label: HUB.label,
            x: self.geometry.center.x,
            y: self.geometry.center.y,
        }
    }

    /// Ring nodes followed by the hub.
    #[must_use]
    pub fn nodes(&self) -> Vec<WheelNode> {
        let mut nodes = self.ring.clone();
        nodes.push(self.hub());
        nodes
    }

    /// The phase under `point`, if any.
    ///
    /// The hub wins inside its radius. Otherwise the nearest ring node whose
    /// hit circle contains the point; ties go to the earlier phase.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&'static str> {
        if point.distance_to(self.geometry.center) <= self.geometry.hub_radius {
            return Some(HUB.phase_id);
        }
        self.ring
            .iter()
            .map(|node| (node, node.point().distance_to(point)))
            .filter(|(_, d)| *d <= self.geometry.node_radius)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(node, _)| node.phase_id)
    }

    /// Hover detail for a phase on this wheel.
    #[must_use]
    pub fn detail(&self, phase_id: &str) -> Option<PhaseDetail> {
        let slot = RING
            .iter()
            .chain(std::iter::once(&HUB))
            .find(|s| s.phase_id == phase_id)?;
        let phase = catalog::phase_by_id(phase_id)?;
        Some(PhaseDetail {
            id: phase.id,
            code: phase.code,
            name: phase.name,
            full_name: phase.full_name,
            description: phase.description,
            color: slot.color,
            steps: phase.steps.len(),
            deliverables: phase.deliverables.len(),
            artifacts: phase.artifacts.len(),
        })
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new(Geometry::default())
    }
}
