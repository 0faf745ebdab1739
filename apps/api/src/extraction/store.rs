use std::collections::BTreeMap;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::jd::{JdSkillRow, JobDescriptionRow};
use crate::models::skill::{Importance, SkillCatalog, SkillCatalogEntry};

pub async fn load_catalog(pool: &PgPool) -> Result<SkillCatalog, sqlx::Error> {
    let entries =
        sqlx::query_as::<_, SkillCatalogEntry>("SELECT id, name FROM skills_master ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(SkillCatalog::new(entries))
}

pub async fn load_job_description(
    pool: &PgPool,
    jd_id: Uuid,
) -> Result<Option<JobDescriptionRow>, sqlx::Error> {
    sqlx::query_as::<_, JobDescriptionRow>(
        "SELECT id, raw_text, parsed_json, min_years_experience FROM job_descriptions WHERE id = $1",
    )
    .bind(jd_id)
    .fetch_optional(pool)
    .await
}

pub async fn load_jd_skills(pool: &PgPool, jd_id: Uuid) -> Result<Vec<JdSkillRow>, sqlx::Error> {
    sqlx::query_as::<_, JdSkillRow>(
        "SELECT jd_id, skill_id, importance FROM jd_skills WHERE jd_id = $1 ORDER BY skill_id",
    )
    .bind(jd_id)
    .fetch_all(pool)
    .await
}

/// Replaces the JD's requirement rows with `skills`.
/// CRITICAL: delete-then-insert in one transaction. Never patch rows in place.
pub async fn replace_jd_skills(
    pool: &PgPool,
    jd_id: Uuid,
    skills: &BTreeMap<i64, Importance>,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM jd_skills WHERE jd_id = $1")
        .bind(jd_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    for (skill_id, importance) in skills {
        sqlx::query("INSERT INTO jd_skills (jd_id, skill_id, importance) VALUES ($1, $2, $3)")
            .bind(jd_id)
            .bind(skill_id)
            .bind(importance.as_str())
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        "Replaced JD {jd_id} skills: {deleted} removed, {} inserted",
        skills.len()
    );
    Ok(())
}
