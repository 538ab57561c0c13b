use alloy::primitives::address;
use std::collections::HashMap;
use stream_deploy::config::networks::{INFURA_API_KEY_VAR, INFURA_PRIVATE_KEY_VAR};
use stream_deploy::{NetworkName, NetworkProfiles};

fn profiles_with(vars: &[(&str, &str)]) -> NetworkProfiles {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    NetworkProfiles::from_lookup(move |name: &str| map.get(name).cloned())
}

#[test]
fn test_cli_profile_contents() {
    let profiles = profiles_with(&[]);
    let cli = profiles.get(NetworkName::Cli);

    assert_eq!(cli.accounts.len(), 2);
    assert_eq!(cli.contracts.len(), 1);
    assert_eq!(cli.host, "http://localhost:8545");
    assert_eq!(
        cli.private_key.as_deref(),
        Some("ec8f4f5c599e912dd4956e72c1b6309703f8c0712006d1bc0a5f40b837aad36d")
    );
}

#[test]
fn test_ganache_profile_contents() {
    let profiles = profiles_with(&[]);
    let ganache = profiles.get(NetworkName::Ganache);

    assert_eq!(ganache.accounts.len(), 3);
    assert_eq!(ganache.contracts, vec![address!("a54c7bf3811ffbd125b52f7d140911f20a57ed56")]);
    assert_eq!(
        ganache.accounts[0].to_string().to_lowercase(),
        "0xb647a7fbbbcda7f477ce315c0c2d814467521005"
    );
    assert_eq!(ganache.host, "http://localhost:7545");
}

#[test]
fn test_infura_profile_follows_environment() {
    for api_key in ["", "abc123", "v3/0123456789abcdef"] {
        let profiles = profiles_with(&[(INFURA_API_KEY_VAR, api_key), (INFURA_PRIVATE_KEY_VAR, "secret")]);
        let infura = profiles.get(NetworkName::Infura);

        assert_eq!(infura.host, format!("https://rinkeby.infura.io/{}", api_key));
        assert_eq!(infura.private_key.as_deref(), Some("secret"));
        assert_eq!(infura.accounts.len(), 2);
        assert_eq!(infura.contracts.len(), 3);
    }
}

#[test]
fn test_infura_profile_without_environment() {
    let profiles = profiles_with(&[]);
    let infura = profiles.get(NetworkName::Infura);

    assert_eq!(infura.host, "https://rinkeby.infura.io/");
    assert_eq!(infura.private_key, None);
}

#[test]
fn test_empty_private_key_is_kept_verbatim() {
    let profiles = profiles_with(&[(INFURA_PRIVATE_KEY_VAR, "")]);
    assert_eq!(profiles.get(NetworkName::Infura).private_key.as_deref(), Some(""));
}

#[test]
fn test_active_profile_is_cli_regardless_of_environment() {
    let bare = profiles_with(&[]);
    let loaded = profiles_with(&[(INFURA_API_KEY_VAR, "abc123"), (INFURA_PRIVATE_KEY_VAR, "secret")]);

    assert_eq!(bare.active(), bare.get(NetworkName::Cli));
    assert_eq!(loaded.active(), bare.active());

    // repeated loads give identical records
    assert_eq!(profiles_with(&[]), bare);
}

#[test]
fn test_selected_network_name_round_trips() {
    let profiles = profiles_with(&[]);
    for name in NetworkName::ALL {
        let selected = profiles.select(name);
        assert_eq!(selected.name, name);
        assert_eq!(name.to_string().parse::<NetworkName>().unwrap(), name);
    }
}
