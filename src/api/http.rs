//! REST/JSON implementation of [`ChoreApi`] on top of `ureq`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ChoreApi;
use crate::error::{ChoreError, Result};
use crate::model::{
    Household, HouseholdId, Task, TaskDraft, TaskId, User, WorkLogDraft, WorkLogReceipt,
};
use crate::storage::config::Config;

const USER_AGENT: &str = concat!("choreboard/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the chore service
pub struct HttpApi {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

impl HttpApi {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.server.base_url,
            config.session.token.clone(),
            Duration::from_secs(config.server.timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let url = self.url(path);
        debug!(%method, %url, "chore service request");
        let request = self
            .agent
            .request(method, &url)
            .set("Accept", "application/json");
        match &self.token {
            Some(token) => request.set("Authorization", &format!("Token {}", token)),
            None => request,
        }
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request("GET", path).call()?;
        read_json(response)
    }

    fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request("POST", path).send_json(body)?;
        read_json(response)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(response: ureq::Response) -> Result<T> {
    let body = response
        .into_string()
        .map_err(|e| ChoreError::transport(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

impl ChoreApi for HttpApi {
    fn fetch_households(&self) -> Result<Vec<Household>> {
        self.get_json("households/")
    }

    fn fetch_tasks(&self, household: HouseholdId) -> Result<Vec<Task>> {
        let tasks: Option<Vec<Task>> = self.get_json(&format!("households/{}/tasks/", household))?;
        Ok(tasks.unwrap_or_default())
    }

    fn fetch_household_users(&self, household: HouseholdId) -> Result<Option<Vec<User>>> {
        self.get_json(&format!("households/{}/users/", household))
    }

    fn create_work_log(&self, draft: &WorkLogDraft) -> Result<Option<f64>> {
        let receipt: WorkLogReceipt = self.post_json("worklogs/", draft)?;
        Ok(receipt.brownie_points)
    }

    fn delete_task(&self, task: TaskId) -> Result<()> {
        self.request("DELETE", &format!("tasks/{}/", task)).call()?;
        Ok(())
    }

    fn toggle_freeze(&self, task: TaskId) -> Result<()> {
        self.request("POST", &format!("tasks/{}/freeze/", task))
            .call()?;
        Ok(())
    }

    fn create_task(&self, household: HouseholdId, draft: &TaskDraft) -> Result<Task> {
        self.post_json(&format!("households/{}/tasks/", household), draft)
    }

    fn login(&self, username: &str, password: &str) -> Result<String> {
        let response: LoginResponse =
            self.post_json("auth/login/", &LoginRequest { username, password })?;
        Ok(response.token)
    }
}
