use crate::models::CsrStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactMetric {
    pub title: &'static str,
    pub value: u32,
    pub target: u32,
    pub currency: bool,
}

impl ImpactMetric {
    pub fn progress_pct(&self) -> u32 {
        progress_pct(self.value, self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellnessService {
    pub title: &'static str,
    pub description: &'static str,
    pub participants: u32,
}

/// Display progress, capped at 100.
pub fn progress_pct(value: u32, target: u32) -> u32 {
    if target == 0 {
        return 100;
    }
    let pct = ((f64::from(value) * 100.0) / f64::from(target)).round();
    pct.min(100.0) as u32
}

pub fn impact_metrics(stats: &CsrStats) -> [ImpactMetric; 4] {
    [
        ImpactMetric {
            title: "People Screened",
            value: stats.people_screened,
            target: 500,
            currency: false,
        },
        ImpactMetric {
            title: "Donations Raised",
            value: stats.donations_collected,
            target: 50_000,
            currency: true,
        },
        ImpactMetric {
            title: "Health Checks",
            value: stats.health_checks_completed,
            target: 200,
            currency: false,
        },
        ImpactMetric {
            title: "Wellness Participants",
            value: stats.wellness_participants,
            target: 600,
            currency: false,
        },
    ]
}

pub fn wellness_services(stats: &CsrStats) -> [WellnessService; 4] {
    [
        WellnessService {
            title: "Free Health Screenings",
            description: "Blood pressure, BMI, and basic health checks",
            participants: stats.people_screened,
        },
        WellnessService {
            title: "Blood Donation Drive",
            description: "Help save lives with voluntary blood donation",
            participants: (f64::from(stats.donations_collected) / 1000.0).round() as u32,
        },
        WellnessService {
            title: "Wellness Activities",
            description: "Yoga, meditation, and fitness sessions",
            participants: stats.wellness_participants,
        },
        WellnessService {
            title: "Health Education",
            description: "Learn about nutrition and healthy living",
            participants: stats.health_checks_completed,
        },
    ]
}

pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Counter values shown at `step` of a `steps`-long ramp towards `target`.
pub fn ramp_stats(target: &CsrStats, step: u32, steps: u32) -> CsrStats {
    if steps == 0 || step >= steps {
        return *target;
    }
    let ease = ease_out_quart(f64::from(step) / f64::from(steps));
    let scale = |v: u32| (f64::from(v) * ease).round() as u32;
    CsrStats {
        people_screened: scale(target.people_screened),
        donations_collected: scale(target.donations_collected),
        health_checks_completed: scale(target.health_checks_completed),
        wellness_participants: scale(target.wellness_participants),
    }
}

/// `28500` -> `"28,500"`.
pub fn group_thousands(value: u32) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
