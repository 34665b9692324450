#[env_handler_proc_macros::expand_struct()]
pub struct EnvSettings {
    #[key = "RIOT_API_KEY"]
    #[value = ""]
    #[description = "Riot Games developer API key, sent as the api_key query parameter"]
    pub riot_api_key: String,

    #[key = "RIOT_API_BASE_URL"]
    #[value = "https://europe.api.riotgames.com"]
    #[description = "Regional routing host for the Riot account and TFT match APIs"]
    pub riot_api_base_url: String,

    #[key = "SRV_KEEP_ALIVE"]
    #[value = 60000]
    #[description = "Time for which a connection should be kept alive, in milliseconds"]
    pub keep_alive: u64,

    #[key = "SRV_CLIENT_REQUEST_TIMEOUT"]
    #[value = 120000]
    #[description = "Max time a request should take before being dropped, in milliseconds"]
    pub client_request_timeout: u64,

    #[key = "SRV_PORT"]
    #[value = 8080]
    #[description = "The open port for the server"]
    pub server_port: u16,

    #[key = "SRV_IP"]
    #[value = "127.0.0.1"]
    #[description = "The ip used by the server"]
    pub server_ip: String,

    #[key = "MATCH_LIST_COUNT"]
    #[value = 200]
    #[description = "Match IDs requested by the match list route"]
    pub match_list_count: u32,

    #[key = "DOUBLE_UP_MATCH_LIST_COUNT"]
    #[value = 1000]
    #[description = "Match IDs requested before the Double Up recency window is applied"]
    pub double_up_match_list_count: u32,

    #[key = "DOUBLE_UP_RECENCY_WINDOW"]
    #[value = 50]
    #[description = "Most recent matches fetched in detail by the Double Up route"]
    pub double_up_recency_window: usize,

    #[key = "DOUBLE_UP_BATCH_SIZE"]
    #[value = 10]
    #[description = "Match details fetched concurrently per batch"]
    pub double_up_batch_size: usize,

    #[key = "DOUBLE_UP_BATCH_DELAY"]
    #[value = 1000]
    #[description = "Pause between two batches of match detail requests, in milliseconds"]
    pub double_up_batch_delay: u64,
}

// run tests with
// cargo test -- --nocapture
// to see readme table in output
