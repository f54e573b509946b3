use std::sync::LazyLock;

use regex::Regex;
use reqwest::Method;

use crate::error::Error;
use crate::types::{GroupId, SteamId};
use crate::{Client, Result};

static MEMBER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<steamID64>(\d+)</steamID64>").expect("member id pattern"));

impl Client {
    /// Lists the members of a Steam community group by scraping the
    /// group's member-list XML. Groups cap the listing at 1000 members.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Kind::Validation`] when the group id is not
    /// a plausible 64-bit group id.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn group_members(&self, group_id: GroupId) -> Result<Vec<SteamId>> {
        if !group_id.is_valid() {
            return Err(Error::validation("invalid steam group id"));
        }

        let url = self
            .community_host()
            .join(&format!("/gid/{group_id}/memberslistxml/"))?;
        let response = self
            .http()
            .request(Method::GET, url)
            .query(&[("xml", "1")])
            .timeout(self.timeout())
            .send()
            .await?;
        let body = response.text().await?;

        MEMBER_ID
            .captures_iter(&body)
            .map(|caps| {
                caps[1]
                    .parse::<u64>()
                    .map(SteamId)
                    .map_err(Error::decode)
            })
            .collect()
    }
}
