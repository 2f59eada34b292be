pub mod auto {
    use crate::{
        error::LookupError,
        geolocation::{get_coords, Geolocation},
        orchestrator::{extract_label, target_url},
        transport::{fetch_json, Transport},
    };

    pub async fn locate<G, T>(geolocation: &G, transport: &T, endpoint: &str) -> Result<String, LookupError>
    where
        G: Geolocation + ?Sized,
        T: Transport + ?Sized,
    {
        let coords = get_coords(geolocation).await?;
        let payload = fetch_json(transport, &target_url(endpoint, &coords)).await?;
        extract_label(&payload)
    }
}

pub mod manual {
    use futures_lite::future;

    use crate::{
        basics::Chain,
        error::LookupError,
        geolocation::{get_coords, Geolocation},
        orchestrator::{extract_label, target_url},
        transport::{fetch_json, Transport},
    };

    pub async fn locate<G, T>(geolocation: &G, transport: &T, endpoint: &str) -> Result<String, LookupError>
    where
        G: Geolocation + ?Sized,
        T: Transport + ?Sized,
    {
        get_coords(geolocation)
            .and_then(|coords| fetch_json(transport, &target_url(endpoint, &coords)))
            .and_then(|payload| future::ready(extract_label(&payload)))
            .await
    }
}
