use serde::Serialize;

use super::CreateInput;

#[derive(Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub created: Vec<i64>,
    pub skipped: Vec<String>,
}

impl super::Command {
    /// Creates recipes one by one. A name that already exists is skipped and
    /// reported; any failure stops the import.
    pub async fn import(&self, inputs: Vec<CreateInput>) -> mealprep_shared::Result<ImportReport> {
        let mut report = ImportReport::default();

        for input in inputs {
            if let Some(id) = self.find_by_name(&input.name).await? {
                tracing::warn!(recipe.id = id, recipe.name = %input.name, "recipe skipped on import");
                report.skipped.push(input.name);
                continue;
            }

            report.created.push(self.create(input).await?);
        }

        tracing::info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "recipes imported"
        );

        Ok(report)
    }
}
