//! Runs retrieval-augmented chat and persists conversation turns.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use maktabati_core::error::AppError;
use maktabati_core::result::AppResult;
use maktabati_database::repositories::conversation::ConversationRepository;
use maktabati_database::repositories::section::SectionRepository;
use maktabati_entity::conversation::Conversation;
use maktabati_rag::QueryPipeline;

use crate::chat::threading::thread_history;
use crate::context::RequestContext;

/// Orchestrates section-scoped chat: history threading, retrieval,
/// generation, and turn persistence.
#[derive(Debug, Clone)]
pub struct ChatService {
    section_repo: Arc<SectionRepository>,
    conversation_repo: Arc<ConversationRepository>,
    pipeline: Arc<QueryPipeline>,
    history_limit: i64,
}

impl ChatService {
    /// Creates a new chat service.
    pub fn new(
        section_repo: Arc<SectionRepository>,
        conversation_repo: Arc<ConversationRepository>,
        pipeline: Arc<QueryPipeline>,
        history_limit: i64,
    ) -> Self {
        Self {
            section_repo,
            conversation_repo,
            pipeline,
            history_limit,
        }
    }

    /// Answer a query against a section's indexed documents and record
    /// the turn.
    pub async fn query(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        query: &str,
        top_k: Option<usize>,
    ) -> AppResult<Conversation> {
        if query.trim().is_empty() {
            return Err(AppError::validation("Query must not be empty"));
        }
        self.ensure_section(ctx, section_id).await?;

        let recent = self
            .conversation_repo
            .find_recent(ctx.user_id, section_id, self.history_limit)
            .await?;
        let history = thread_history(recent);

        let outcome = self
            .pipeline
            .process_query(query, &history, top_k, None)
            .await?;

        let turn = self
            .conversation_repo
            .create(
                ctx.user_id,
                section_id,
                &outcome.query,
                &outcome.response,
                &outcome.sources,
            )
            .await?;

        info!(
            %section_id,
            turn_id = %turn.id,
            sources = turn.sources.len(),
            "Recorded conversation turn"
        );
        Ok(turn)
    }

    /// Answer a query without retrieval, history only.
    pub async fn direct_query(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        query: &str,
    ) -> AppResult<Conversation> {
        if query.trim().is_empty() {
            return Err(AppError::validation("Query must not be empty"));
        }
        self.ensure_section(ctx, section_id).await?;

        let recent = self
            .conversation_repo
            .find_recent(ctx.user_id, section_id, self.history_limit)
            .await?;
        let history = thread_history(recent);

        let outcome = self.pipeline.process_direct_query(query, &history).await?;

        self.conversation_repo
            .create(
                ctx.user_id,
                section_id,
                &outcome.query,
                &outcome.response,
                &outcome.sources,
            )
            .await
    }

    /// List a section's recent turns in chronological order.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<Conversation>> {
        self.ensure_section(ctx, section_id).await?;
        let mut turns = self
            .conversation_repo
            .find_recent(ctx.user_id, section_id, limit)
            .await?;
        turns.reverse();
        Ok(turns)
    }

    /// Delete one turn.
    pub async fn delete_turn(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<()> {
        let deleted = self
            .conversation_repo
            .delete(ctx.user_id, section_id, id)
            .await?;
        if !deleted {
            return Err(AppError::not_found("Conversation not found"));
        }
        Ok(())
    }

    /// Delete every turn in a section.
    pub async fn clear(&self, ctx: &RequestContext, section_id: Uuid) -> AppResult<u64> {
        let removed = self
            .conversation_repo
            .delete_all(ctx.user_id, section_id)
            .await?;
        info!(%section_id, removed, "Cleared conversation history");
        Ok(removed)
    }

    async fn ensure_section(&self, ctx: &RequestContext, section_id: Uuid) -> AppResult<()> {
        self.section_repo
            .find_by_id(ctx.user_id, section_id)
            .await?
            .ok_or_else(|| AppError::not_found("Section not found"))?;
        Ok(())
    }
}
