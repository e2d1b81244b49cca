use itertools::iproduct;

use crate::config::SweepSpec;

/// Topology scale baked into every flow descriptor.
const TOPO_SCALE: u32 = 320;
/// Link capacity baked into every flow descriptor.
const LINK_CAPACITY: &str = "100G";

/// One point of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combo<'a> {
    pub pfc: u8,
    pub cc: u8,
    pub dataset: &'a str,
    pub duration: &'a str,
    pub load: f64,
}

/// Iterate the sweep in nested-loop order: PFC outer, then CC, then the
/// aligned (dataset, duration) pairs, then load innermost.
///
/// With `pfc == 0`, the baseline `cc == 0` would duplicate the plain no-PFC
/// run, so only non-baseline CC variants are enumerated there. That skip is
/// the only conditional in the enumeration.
pub fn combos(spec: &SweepSpec) -> impl Iterator<Item = Combo<'_>> {
    iproduct!(
        spec.pfc_variants.iter().copied(),
        spec.cc_variants.iter().copied(),
        spec.datasets.iter().zip(spec.durations.iter()),
        spec.loads.iter().copied()
    )
    .filter(|&(pfc, cc, _, _)| !(pfc == 0 && cc == 0))
    .map(|(pfc, cc, (dataset, duration), load)| Combo {
        pfc,
        cc,
        dataset: dataset.as_str(),
        duration: duration.as_str(),
        load,
    })
}

impl Combo<'_> {
    /// Flow descriptor consumed by the simulator:
    /// `<dataset>_320_<load>_100G_<duration>`.
    pub fn flow_descriptor(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            self.dataset, TOPO_SCALE, self.load, LINK_CAPACITY, self.duration
        )
    }

    /// Log file the generated command redirects into. Unique per
    /// `(pfc, cc, dataset, load)` tuple.
    pub fn out_file(&self, spec: &SweepSpec) -> String {
        format!(
            "{}PFC{}-CC{}-{}-{}.out",
            spec.output_prefix, self.pfc, self.cc, self.load, self.dataset
        )
    }

    /// Full shell line launching the simulator for this combination as a
    /// background job.
    pub fn command_line(&self, spec: &SweepSpec) -> String {
        format!(
            "{}--pfc={} --cc={} --time={} --flow={}\" > {} &",
            spec.command_template,
            self.pfc,
            self.cc,
            self.duration,
            self.flow_descriptor(),
            self.out_file(spec)
        )
    }
}
