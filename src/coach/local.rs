use async_trait::async_trait;
use tracing::info;

use crate::coach::{Advice, AdviceSource, Coach};
use crate::error::Result;
use crate::interface::render::text_report;
use crate::models::BiometricInput;
use crate::planner::NutritionCalculator;

/// Deterministic coach: the narrative is the plain-text report.
#[derive(Debug, Clone, Default)]
pub struct LocalCoach {
    calculator: NutritionCalculator,
}

impl LocalCoach {
    pub fn new(calculator: NutritionCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &NutritionCalculator {
        &self.calculator
    }

    /// Synchronous form of [`Coach::advise`].
    pub fn advise_now(&self, input: &BiometricInput) -> Result<Advice> {
        let plan = self.calculator.plan(input)?;
        info!(
            goal = %input.goal,
            activity = %input.activity_level,
            calorie_target = plan.macros.calorie_target,
            "computed plan"
        );
        let narrative = text_report(&plan);
        Ok(Advice {
            plan,
            narrative,
            source: AdviceSource::Local,
        })
    }
}

#[async_trait]
impl Coach for LocalCoach {
    fn name(&self) -> &str {
        "local"
    }

    async fn advise(&self, input: &BiometricInput) -> Result<Advice> {
        self.advise_now(input)
    }
}
