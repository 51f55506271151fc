use chrono::NaiveDate;
use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    AddRecipeRequest, AddZoneRequest, ChildcarePayload, ChildcareSchedule, CleaningZone,
    CommentPayload, DailySchedule, FetchError, MealTime, MealTimePayload, MessageResponse, Recipe,
    RecipeComment, RecipePayload, ScheduleTask, ShoppingItemPayload, ShoppingListItem,
    TaskListResponse, ZonePayload, DAYS_PER_WEEK,
};

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Which backend surface a request goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Api {
    Helper,
    Admin,
}

fn fetch_error(e: gloo_net::Error) -> FetchError {
    match e {
        gloo_net::Error::SerdeError(e) => FetchError::Malformed(e.to_string()),
        other => FetchError::Network(other.to_string()),
    }
}

fn upcoming_path(start_date: NaiveDate, days: u32) -> String {
    format!(
        "/schedule/upcoming?days={}&start_date={}",
        days,
        start_date.format("%Y-%m-%d")
    )
}

/// REST client for the helper and admin APIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    helper_root: String,
    admin_root: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            helper_root: config.helper_api_root.clone(),
            admin_root: config.admin_api_root.clone(),
        }
    }

    fn url(&self, api: Api, path: &str) -> String {
        let root = match api {
            Api::Helper => &self.helper_root,
            Api::Admin => &self.admin_root,
        };
        format!("{}{}", root, path)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        api: Api,
        path: &str,
        body: Option<impl Serialize>,
    ) -> Result<T, FetchError> {
        let url = self.url(api, path);
        log::debug!("{:?} {}", method, url);

        let request: RequestBuilder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = if let Some(body) = body {
            request
                .header("Content-Type", "application/json")
                .json(&body)
                .map_err(fetch_error)?
                .send()
                .await
                .map_err(fetch_error)?
        } else {
            request.send().await.map_err(fetch_error)?
        };

        if response.ok() {
            response.json::<T>().await.map_err(|e| {
                log::warn!("unexpected response body from {}: {}", url, e);
                fetch_error(e)
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            let error = FetchError::from_status(response.status(), &body);
            log::warn!("{:?} {} failed: {}", method, url, error);
            Err(error)
        }
    }

    async fn get<T: DeserializeOwned>(&self, api: Api, path: &str) -> Result<T, FetchError> {
        self.request(Method::Get, api, path, None::<()>).await
    }

    // Helper schedule endpoints
    pub async fn today_schedule(&self) -> Result<TaskListResponse, FetchError> {
        self.get(Api::Helper, "/schedule/today").await
    }

    /// The seven daily schedules starting at `start` (a Monday for calendar views).
    pub async fn week_schedule(&self, start: NaiveDate) -> Result<Vec<DailySchedule>, FetchError> {
        self.get(Api::Helper, &upcoming_path(start, DAYS_PER_WEEK)).await
    }

    pub async fn complete_task(&self, task_id: u64) -> Result<ScheduleTask, FetchError> {
        self.request(
            Method::Post,
            Api::Helper,
            &format!("/tasks/{}/complete", task_id),
            None::<()>,
        )
        .await
    }

    pub async fn uncomplete_task(&self, task_id: u64) -> Result<ScheduleTask, FetchError> {
        self.request(
            Method::Post,
            Api::Helper,
            &format!("/tasks/{}/uncomplete", task_id),
            None::<()>,
        )
        .await
    }

    // Helper shopping endpoints
    pub async fn list_shopping(&self) -> Result<Vec<ShoppingListItem>, FetchError> {
        self.get(Api::Helper, "/shopping").await
    }

    pub async fn add_shopping_item(
        &self,
        request: ShoppingItemPayload,
    ) -> Result<ShoppingListItem, FetchError> {
        self.request(Method::Post, Api::Helper, "/shopping", Some(request))
            .await
    }

    pub async fn mark_purchased(&self, item_id: u64) -> Result<ShoppingListItem, FetchError> {
        self.request(
            Method::Post,
            Api::Helper,
            &format!("/shopping/{}/purchased", item_id),
            None::<()>,
        )
        .await
    }

    pub async fn delete_shopping_item(&self, item_id: u64) -> Result<MessageResponse, FetchError> {
        self.request(
            Method::Delete,
            Api::Helper,
            &format!("/shopping/{}", item_id),
            None::<()>,
        )
        .await
    }

    pub async fn helper_recipe(&self, recipe_id: u64) -> Result<Recipe, FetchError> {
        self.get(Api::Helper, &format!("/recipes/{}", recipe_id)).await
    }

    // Admin recipe endpoints
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        self.get(Api::Admin, "/recipes").await
    }

    pub async fn get_recipe(&self, recipe_id: u64) -> Result<Recipe, FetchError> {
        self.get(Api::Admin, &format!("/recipes/{}", recipe_id)).await
    }

    pub async fn create_recipe(&self, request: RecipePayload) -> Result<Recipe, FetchError> {
        self.request(Method::Post, Api::Admin, "/recipes", Some(request))
            .await
    }

    pub async fn update_recipe(
        &self,
        recipe_id: u64,
        request: RecipePayload,
    ) -> Result<Recipe, FetchError> {
        self.request(
            Method::Put,
            Api::Admin,
            &format!("/recipes/{}", recipe_id),
            Some(request),
        )
        .await
    }

    pub async fn delete_recipe(&self, recipe_id: u64) -> Result<MessageResponse, FetchError> {
        self.request(
            Method::Delete,
            Api::Admin,
            &format!("/recipes/{}", recipe_id),
            None::<()>,
        )
        .await
    }

    pub async fn list_comments(&self, recipe_id: u64) -> Result<Vec<RecipeComment>, FetchError> {
        self.get(Api::Admin, &format!("/recipes/{}/comments", recipe_id))
            .await
    }

    pub async fn add_comment(
        &self,
        recipe_id: u64,
        request: CommentPayload,
    ) -> Result<RecipeComment, FetchError> {
        self.request(
            Method::Post,
            Api::Admin,
            &format!("/recipes/{}/comments", recipe_id),
            Some(request),
        )
        .await
    }

    pub async fn delete_comment(&self, comment_id: u64) -> Result<MessageResponse, FetchError> {
        self.request(
            Method::Delete,
            Api::Admin,
            &format!("/comments/{}", comment_id),
            None::<()>,
        )
        .await
    }

    // Admin meal time endpoints
    pub async fn list_meal_times(&self) -> Result<Vec<MealTime>, FetchError> {
        self.get(Api::Admin, "/mealtimes").await
    }

    pub async fn get_meal_time(&self, meal_time_id: u64) -> Result<MealTime, FetchError> {
        self.get(Api::Admin, &format!("/mealtimes/{}", meal_time_id))
            .await
    }

    pub async fn create_meal_time(&self, request: MealTimePayload) -> Result<MealTime, FetchError> {
        self.request(Method::Post, Api::Admin, "/mealtimes", Some(request))
            .await
    }

    pub async fn update_meal_time(
        &self,
        meal_time_id: u64,
        request: MealTimePayload,
    ) -> Result<MealTime, FetchError> {
        self.request(
            Method::Put,
            Api::Admin,
            &format!("/mealtimes/{}", meal_time_id),
            Some(request),
        )
        .await
    }

    pub async fn delete_meal_time(&self, meal_time_id: u64) -> Result<MessageResponse, FetchError> {
        self.request(
            Method::Delete,
            Api::Admin,
            &format!("/mealtimes/{}", meal_time_id),
            None::<()>,
        )
        .await
    }

    // Admin cleaning zone endpoints
    pub async fn list_zones(&self) -> Result<Vec<CleaningZone>, FetchError> {
        self.get(Api::Admin, "/zones").await
    }

    pub async fn get_zone(&self, zone_id: u64) -> Result<CleaningZone, FetchError> {
        self.get(Api::Admin, &format!("/zones/{}", zone_id)).await
    }

    pub async fn create_zone(&self, request: ZonePayload) -> Result<CleaningZone, FetchError> {
        self.request(Method::Post, Api::Admin, "/zones", Some(request))
            .await
    }

    pub async fn update_zone(
        &self,
        zone_id: u64,
        request: ZonePayload,
    ) -> Result<CleaningZone, FetchError> {
        self.request(
            Method::Put,
            Api::Admin,
            &format!("/zones/{}", zone_id),
            Some(request),
        )
        .await
    }

    pub async fn delete_zone(&self, zone_id: u64) -> Result<MessageResponse, FetchError> {
        self.request(
            Method::Delete,
            Api::Admin,
            &format!("/zones/{}", zone_id),
            None::<()>,
        )
        .await
    }

    // Admin childcare endpoints
    pub async fn list_childcare(&self) -> Result<Vec<ChildcareSchedule>, FetchError> {
        self.get(Api::Admin, "/childcare").await
    }

    pub async fn create_childcare(
        &self,
        request: ChildcarePayload,
    ) -> Result<ChildcareSchedule, FetchError> {
        self.request(Method::Post, Api::Admin, "/childcare", Some(request))
            .await
    }

    pub async fn update_childcare(
        &self,
        schedule_id: u64,
        request: ChildcarePayload,
    ) -> Result<ChildcareSchedule, FetchError> {
        self.request(
            Method::Put,
            Api::Admin,
            &format!("/childcare/{}", schedule_id),
            Some(request),
        )
        .await
    }

    pub async fn delete_childcare(&self, schedule_id: u64) -> Result<MessageResponse, FetchError> {
        self.request(
            Method::Delete,
            Api::Admin,
            &format!("/childcare/{}", schedule_id),
            None::<()>,
        )
        .await
    }

    // Admin task association endpoints
    pub async fn get_task(&self, task_id: u64) -> Result<ScheduleTask, FetchError> {
        self.get(Api::Admin, &format!("/tasks/{}", task_id)).await
    }

    pub async fn add_task_recipe(
        &self,
        task_id: u64,
        recipe_id: u64,
    ) -> Result<ScheduleTask, FetchError> {
        self.request(
            Method::Post,
            Api::Admin,
            &format!("/tasks/{}/recipes", task_id),
            Some(AddRecipeRequest { recipe_id }),
        )
        .await
    }

    pub async fn remove_task_recipe(
        &self,
        task_id: u64,
        recipe_id: u64,
    ) -> Result<ScheduleTask, FetchError> {
        self.request(
            Method::Delete,
            Api::Admin,
            &format!("/tasks/{}/recipes/{}", task_id, recipe_id),
            None::<()>,
        )
        .await
    }

    pub async fn add_task_zone(&self, task_id: u64, zone_id: u64) -> Result<ScheduleTask, FetchError> {
        self.request(
            Method::Post,
            Api::Admin,
            &format!("/tasks/{}/zones", task_id),
            Some(AddZoneRequest { zone_id }),
        )
        .await
    }

    pub async fn remove_task_zone(
        &self,
        task_id: u64,
        zone_id: u64,
    ) -> Result<ScheduleTask, FetchError> {
        self.request(
            Method::Delete,
            Api::Admin,
            &format!("/tasks/{}/zones/{}", task_id, zone_id),
            None::<()>,
        )
        .await
    }

    pub async fn regenerate_schedule(&self) -> Result<MessageResponse, FetchError> {
        self.request(Method::Post, Api::Admin, "/regenerate-schedule", None::<()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_use_configured_roots() {
        let config = Config::from_vars(Some("http://helper.local/api/"), None, None).unwrap();
        let client = ApiClient::new(&config);

        assert_eq!(
            client.url(Api::Helper, "/schedule/today"),
            "http://helper.local/api/schedule/today"
        );
        assert_eq!(client.url(Api::Admin, "/zones/4"), "/admin/api/zones/4");
    }

    #[test]
    fn test_week_request_covers_seven_days() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(
            upcoming_path(monday, DAYS_PER_WEEK),
            "/schedule/upcoming?days=7&start_date=2024-03-04"
        );
    }
}
