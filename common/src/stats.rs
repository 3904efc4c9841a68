use std::ops::Add;

/// Totals for one run of a battery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteStats {
    pub total: usize,
    pub passed: usize,
}

impl SuiteStats {
    pub fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }
}

impl Add for SuiteStats {
    type Output = SuiteStats;

    fn add(self, other: SuiteStats) -> SuiteStats {
        SuiteStats {
            total: self.total + other.total,
            passed: self.passed + other.passed,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
