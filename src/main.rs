use clap::Parser;
use stream_deploy::config::env::{load_env_file, resolve_env_path};
use stream_deploy::utils::error::DeployError;
use stream_deploy::utils::logger;
use stream_deploy::{
    CliConfig, DeployEngine, DeployOptions, DeployPlan, DryRunDeployer, NetworkProfiles, RpcDeployer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting stream-deploy");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入 .env (不覆蓋既有環境變數)
    let env_path = resolve_env_path(config.env_file.as_deref(), config.config.as_deref());
    if let Err(e) = load_env_file(&env_path) {
        fail(&e);
    }

    let options = DeployOptions {
        network: config.network,
        params: config.params,
        artifact: config.artifact.clone(),
        config: config.config.clone(),
        from: config.from,
        unlocked: config.unlocked,
    };

    // 在任何網路請求前先驗證配置
    let plan = match DeployPlan::prepare(&options, NetworkProfiles::from_env()) {
        Ok(plan) => plan,
        Err(e) => fail(&e),
    };
    tracing::info!("✅ Configuration loaded and validated successfully");

    let result = if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be sent");
        DeployEngine::new(DryRunDeployer::new()).run(&plan).await
    } else {
        let deployer = match RpcDeployer::new(&plan.profile.host, plan.signer.clone()) {
            Ok(deployer) => deployer,
            Err(e) => fail(&e),
        };
        if deployer.is_signing() {
            tracing::info!("🔑 Signing locally as {:?}", plan.from);
        } else {
            tracing::info!("🔓 Node signs for unlocked account {:?}", plan.from);
        }
        DeployEngine::new(deployer).run(&plan).await
    };

    match result {
        Ok(receipt) => {
            tracing::info!("✅ Deployment finished");
            match receipt.transaction_hash {
                Some(hash) => println!("✅ Stream deployment submitted: {}", hash),
                None => println!("✅ Dry run complete, no transaction sent"),
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &DeployError) -> ! {
    tracing::error!(
        "❌ Deployment failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code());
}
