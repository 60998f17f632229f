use crate::config::Config;
use crate::device_camera::interface::StillImage;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{
    PredictRequest, Prediction, PredictionClient, ServiceBanner,
};
use reqwest::blocking::{Client, Response};
use std::sync::Arc;

pub struct PredictionClientHttp {
    client: Client,
    predict_url: String,
    service_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            predict_url: config.predict_url.clone(),
            service_url: config.service_url.clone(),
            logger: logger.with_namespace("prediction_client").with_namespace("http"),
        })
    }
}

fn ensure_success(response: Response) -> Result<Response, Box<dyn std::error::Error + Send + Sync>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(format!("service responded with {}: {}", status, body).into())
}

pub fn parse_prediction(body: &str) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>> {
    let prediction: Prediction = serde_json::from_str(body)?;
    Ok(prediction)
}

impl PredictionClient for PredictionClientHttp {
    fn predict(
        &self,
        image: &StillImage,
    ) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "POST {} ({} bytes, {})",
            self.predict_url,
            image.bytes.len(),
            image.mime_type
        ))?;

        let data_uri = image.to_data_uri();
        let response = self
            .client
            .post(&self.predict_url)
            .json(&PredictRequest { image: &data_uri })
            .send()?;
        let body = ensure_success(response)?.text()?;
        let prediction = parse_prediction(&body)?;

        self.logger
            .info(&format!("Prediction received: {:?}", prediction))?;
        Ok(prediction)
    }

    fn health_check(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(&self.service_url).send()?;
        let banner: ServiceBanner = ensure_success(response)?.json()?;
        Ok(banner.message)
    }
}
