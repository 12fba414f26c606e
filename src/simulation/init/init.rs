use crate::domain::SimConfig;
use crate::systems::broad_phase::BroadPhaseRegistry;

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32) -> WorldCore {
    WorldCore {
        width,
        height,
        bodies: Vec::new(),
        segments: Vec::new(),
        config: SimConfig::default(),
        broad_phase: BroadPhaseRegistry::new(),
        pairs: Vec::with_capacity(256),
        frame: 0,

        render: RenderBuffers {
            body_buffer: Vec::new(),
            color_buffer: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
