//! DynamoDB implementation of the `EventStore` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use serde_json::Value;

use portal_core::error::PortalError;
use portal_core::event::EventRecord;
use portal_core::store::{EventStore, EventUpdate};

use crate::item;

/// Name of the global secondary index enforcing slug lookups.
const SEO_URL_INDEX: &str = "gsi-seoUrl";

/// DynamoDB-backed event store.
#[derive(Debug, Clone)]
pub struct DynamoDbEventStore {
    client: Client,
    table: String,
}

impl DynamoDbEventStore {
    /// Creates a new store over the given table.
    #[must_use]
    pub fn new(client: Client, table: String) -> Self {
        Self { client, table }
    }
}

/// Builds the wholesale `SET` expression for an update.
///
/// Every replaced field goes through `#name`/`:value` placeholders because
/// several of them (`status`, `region`) are DynamoDB reserved words.
fn update_expression(
    update: &EventUpdate,
) -> Result<(String, HashMap<String, String>, HashMap<String, AttributeValue>), PortalError> {
    let value = serde_json::to_value(update)
        .map_err(|e| PortalError::Infrastructure(format!("failed to serialize update: {e}")))?;
    let Value::Object(fields) = value else {
        return Err(PortalError::Infrastructure(
            "event update did not serialize to an object".to_owned(),
        ));
    };

    let mut clauses = Vec::with_capacity(fields.len());
    let mut names = HashMap::with_capacity(fields.len());
    let mut values = HashMap::with_capacity(fields.len());
    for (field, field_value) in fields {
        clauses.push(format!("#{field} = :{field}"));
        values.insert(format!(":{field}"), item::json_to_attr(field_value));
        names.insert(format!("#{field}"), field);
    }

    Ok((format!("SET {}", clauses.join(", ")), names, values))
}

fn opt_string_attr(value: Option<&str>) -> AttributeValue {
    match value {
        Some(text) => AttributeValue::S(text.to_owned()),
        None => AttributeValue::Null(true),
    }
}

#[async_trait]
impl EventStore for DynamoDbEventStore {
    async fn get(&self, event_id: &str) -> Result<Option<EventRecord>, PortalError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("eventId", AttributeValue::S(event_id.to_owned()))
            .send()
            .await
            .map_err(|e| {
                PortalError::Infrastructure(format!("get_item failed: {}", DisplayErrorContext(&e)))
            })?;

        output.item().map(item::from_item).transpose()
    }

    async fn put(&self, record: &EventRecord) -> Result<(), PortalError> {
        let item = item::to_item(record)?;
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| {
                PortalError::Infrastructure(format!("put_item failed: {}", DisplayErrorContext(&e)))
            })?;

        tracing::debug!(event_id = %record.event_id, "event written");
        Ok(())
    }

    async fn update(
        &self,
        event_id: &str,
        update: &EventUpdate,
    ) -> Result<Option<EventRecord>, PortalError> {
        let (expression, names, values) = update_expression(update)?;

        let result = self
            .client
            .update_item()
            .table_name(&self.table)
            .key("eventId", AttributeValue::S(event_id.to_owned()))
            .update_expression(expression)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            // Without this guard the update would upsert a stub record.
            .condition_expression("attribute_exists(eventId)")
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => output.attributes().map(item::from_item).transpose(),
            Err(err) => {
                let service_error = err.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    Ok(None)
                } else {
                    Err(PortalError::Infrastructure(format!(
                        "update_item failed: {}",
                        DisplayErrorContext(&service_error)
                    )))
                }
            }
        }
    }

    async fn mark_deleted(
        &self,
        event_id: &str,
        updated_at: &str,
        updated_by: Option<&str>,
    ) -> Result<bool, PortalError> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table)
            .key("eventId", AttributeValue::S(event_id.to_owned()))
            .update_expression("SET isDeleted = :isDeleted, updatedAt = :updatedAt, updatedBy = :updatedBy")
            .expression_attribute_values(":isDeleted", AttributeValue::Bool(true))
            .expression_attribute_values(":updatedAt", AttributeValue::S(updated_at.to_owned()))
            .expression_attribute_values(":updatedBy", opt_string_attr(updated_by))
            .condition_expression("attribute_exists(eventId)")
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) => {
                let service_error = err.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    Ok(false)
                } else {
                    Err(PortalError::Infrastructure(format!(
                        "update_item failed: {}",
                        DisplayErrorContext(&service_error)
                    )))
                }
            }
        }
    }

    async fn find_by_seo_url(
        &self,
        seo_url: &str,
        exclude_event_id: Option<&str>,
    ) -> Result<Vec<EventRecord>, PortalError> {
        let mut request = self
            .client
            .query()
            .table_name(&self.table)
            .index_name(SEO_URL_INDEX)
            .key_condition_expression("seoUrl = :seoUrl")
            .expression_attribute_values(":seoUrl", AttributeValue::S(seo_url.to_owned()));

        if let Some(exclude) = exclude_event_id {
            request = request
                .filter_expression("eventId <> :eventId")
                .expression_attribute_values(":eventId", AttributeValue::S(exclude.to_owned()));
        }

        let output = request.send().await.map_err(|e| {
            PortalError::Infrastructure(format!("query failed: {}", DisplayErrorContext(&e)))
        })?;

        output.items().iter().map(item::from_item).collect()
    }
}
