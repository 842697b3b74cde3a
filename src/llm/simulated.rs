use async_trait::async_trait;

use crate::llm::client::CompletionBackend;
use crate::llm::prompts::Prompt;
use crate::model::ModelId;
use crate::Result;

/// Canned summary returned in simulation mode.
pub const SIMULATED_SUMMARY: &str = "🟥 גורמי סיכון מיידיים
- אלרגיות/רגישויות:
  - אלרגיה לפניצילין
- מחלות רקע:
  - אין מידע
- תרופות קבועות:
  - אין מידע
- הנחיות/מגבלות:
  - אין להכניס עירוי ביד שמאל

🟧 היסטוריה רפואית רלוונטית
- אלרגיות/רגישויות:
  - רגישות ליוד
- מחלות רקע:
  - סוכרת סוג 2
- תרופות קבועות:
  - מטפורמין
- הנחיות/מגבלות:
  - אין מידע

🟩 מידע כללי
- אלרגיות/רגישויות:
  - אין מידע
- מחלות רקע:
  - כאבי גב כרוניים
- תרופות קבועות:
  - אין מידע
- הנחיות/מגבלות:
  - נעזר בקביים";

/// Offline backend for checking formatting without an API call.
pub struct SimulatedBackend;

#[async_trait]
impl CompletionBackend for SimulatedBackend {
    async fn complete(&self, _prompt: &Prompt, model: ModelId) -> Result<String> {
        tracing::debug!("Simulating completion for {}", model);
        Ok(SIMULATED_SUMMARY.to_string())
    }
}
