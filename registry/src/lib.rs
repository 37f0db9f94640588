use std::sync::Arc;

use adapter::gateway::GatewayClient;
use adapter::navigator::DownloadNavigator;
use adapter::repository::{
    admin::AdminRepositoryImpl, analytics::AnalyticsRepositoryImpl,
    approver::ApproverRepositoryImpl, campus::CampusRepositoryImpl, class::ClassRepositoryImpl,
    export::ExportRepositoryImpl, legacy::LegacyRepositoryImpl,
    lost_found::LostAndFoundRepositoryImpl, maintenance::MaintenanceRepositoryImpl,
    policy::PolicyRepositoryImpl, quote::QuoteRepositoryImpl,
    reservation::ReservationRepositoryImpl, room::RoomRepositoryImpl,
    storage::StorageRepositoryImpl,
};
use kernel::repository::{
    admin::AdminRepository, analytics::AnalyticsRepository, approver::ApproverRepository,
    campus::CampusRepository, class::ClassRepository, export::ExportRepository,
    legacy::LegacyRepository, lost_found::LostAndFoundRepository,
    maintenance::MaintenanceRepository, policy::PolicyRepository, quote::QuoteRepository,
    reservation::ReservationRepository, room::RoomRepository, storage::StorageRepository,
};
use shared::{config::AppConfig, error::AppResult};

#[derive(Clone)]
pub struct AppRegistry {
    reservation_repository: Arc<dyn ReservationRepository>,
    approver_repository: Arc<dyn ApproverRepository>,
    admin_repository: Arc<dyn AdminRepository>,
    campus_repository: Arc<dyn CampusRepository>,
    room_repository: Arc<dyn RoomRepository>,
    class_repository: Arc<dyn ClassRepository>,
    policy_repository: Arc<dyn PolicyRepository>,
    analytics_repository: Arc<dyn AnalyticsRepository>,
    maintenance_repository: Arc<dyn MaintenanceRepository>,
    lost_found_repository: Arc<dyn LostAndFoundRepository>,
    storage_repository: Arc<dyn StorageRepository>,
    quote_repository: Arc<dyn QuoteRepository>,
    export_repository: Arc<dyn ExportRepository>,
    legacy_repository: Arc<dyn LegacyRepository>,
}

impl AppRegistry {
    pub fn new(app_config: AppConfig) -> AppResult<Self> {
        // one client, so the admin session cookie is seen by every repository
        let gateway = GatewayClient::new(&app_config.gateway)?;

        let storage_repository: Arc<dyn StorageRepository> =
            Arc::new(StorageRepositoryImpl::new(gateway.clone()));
        let navigator = Arc::new(DownloadNavigator::new(
            gateway.inner_ref().clone(),
            app_config.export.download_dir,
        ));

        Ok(Self {
            reservation_repository: Arc::new(ReservationRepositoryImpl::new(gateway.clone())),
            approver_repository: Arc::new(ApproverRepositoryImpl::new(gateway.clone())),
            admin_repository: Arc::new(AdminRepositoryImpl::new(gateway.clone())),
            campus_repository: Arc::new(CampusRepositoryImpl::new(gateway.clone())),
            room_repository: Arc::new(RoomRepositoryImpl::new(gateway.clone())),
            class_repository: Arc::new(ClassRepositoryImpl::new(gateway.clone())),
            policy_repository: Arc::new(PolicyRepositoryImpl::new(gateway.clone())),
            analytics_repository: Arc::new(AnalyticsRepositoryImpl::new(gateway.clone())),
            maintenance_repository: Arc::new(MaintenanceRepositoryImpl::new(gateway.clone())),
            lost_found_repository: Arc::new(LostAndFoundRepositoryImpl::new(
                gateway.clone(),
                storage_repository.clone(),
                app_config.storage.preview_stagger,
            )),
            storage_repository,
            quote_repository: Arc::new(QuoteRepositoryImpl::new(
                gateway.clone(),
                app_config.quote.url,
            )),
            export_repository: Arc::new(ExportRepositoryImpl::new(gateway.clone(), navigator)),
            legacy_repository: Arc::new(LegacyRepositoryImpl::new(gateway)),
        })
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn approver_repository(&self) -> Arc<dyn ApproverRepository> {
        self.approver_repository.clone()
    }

    pub fn admin_repository(&self) -> Arc<dyn AdminRepository> {
        self.admin_repository.clone()
    }

    pub fn campus_repository(&self) -> Arc<dyn CampusRepository> {
        self.campus_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn class_repository(&self) -> Arc<dyn ClassRepository> {
        self.class_repository.clone()
    }

    pub fn policy_repository(&self) -> Arc<dyn PolicyRepository> {
        self.policy_repository.clone()
    }

    pub fn analytics_repository(&self) -> Arc<dyn AnalyticsRepository> {
        self.analytics_repository.clone()
    }

    pub fn maintenance_repository(&self) -> Arc<dyn MaintenanceRepository> {
        self.maintenance_repository.clone()
    }

    pub fn lost_found_repository(&self) -> Arc<dyn LostAndFoundRepository> {
        self.lost_found_repository.clone()
    }

    pub fn storage_repository(&self) -> Arc<dyn StorageRepository> {
        self.storage_repository.clone()
    }

    pub fn quote_repository(&self) -> Arc<dyn QuoteRepository> {
        self.quote_repository.clone()
    }

    pub fn export_repository(&self) -> Arc<dyn ExportRepository> {
        self.export_repository.clone()
    }

    pub fn legacy_repository(&self) -> Arc<dyn LegacyRepository> {
        self.legacy_repository.clone()
    }
}
