use anyhow::{anyhow, Context};
use ash::vk;
use log::error;
use vkportability::{
    is_portability_supported, BackendKind, Config, ImageViewRequest, LoaderBackend,
    PortabilityQueries, QueryBackend, VkError,
};

fn main() {
    vkportability::init();

    println!("VK_EXTX_portability_subset Sample");
    println!("=================================\n");

    if let Err(e) = run() {
        error!("{:#}", e);
        println!("\n✗ Sample did not complete: {:#}", e);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("Could not read configuration")?;
    println!("Backend: {}\n", config.backend);

    match config.backend {
        BackendKind::Mock => run_mock(),
        BackendKind::Loader => run_loader(),
    }
}

#[cfg(feature = "mock-driver")]
fn run_mock() -> anyhow::Result<()> {
    // The mock driver doesn't need real handles.
    report(
        &vkportability::MockDriver,
        vk::Instance::null(),
        vk::PhysicalDevice::null(),
    )
}

#[cfg(not(feature = "mock-driver"))]
fn run_mock() -> anyhow::Result<()> {
    Err(anyhow!("mock driver not compiled in"))
}

fn run_loader() -> anyhow::Result<()> {
    let backend = LoaderBackend::load().context("Could not load the Vulkan loader")?;

    let app_info = vk::ApplicationInfo::default()
        .application_name(c"Portability Subset Sample")
        .application_version(vk::make_api_version(0, 1, 0, 0))
        .engine_name(c"No Engine")
        .engine_version(vk::make_api_version(0, 1, 0, 0))
        .api_version(vk::API_VERSION_1_0);

    // The *2KHR queries come from this instance extension.
    let extensions = [c"VK_KHR_get_physical_device_properties2".as_ptr()];
    let create_info = vk::InstanceCreateInfo::default()
        .application_info(&app_info)
        .enabled_extension_names(&extensions);

    let instance = unsafe { backend.entry().create_instance(&create_info, None) }
        .context("Could not create Vulkan instance")?;

    let result = unsafe { instance.enumerate_physical_devices() }
        .context("Could not enumerate physical devices")
        .and_then(|devices| {
            let physical_device = devices
                .first()
                .copied()
                .ok_or_else(|| anyhow!("No Vulkan devices found"))?;
            report(&backend, instance.handle(), physical_device)
        });

    unsafe { instance.destroy_instance(None) };
    result
}

fn report(
    backend: &dyn QueryBackend,
    instance: vk::Instance,
    physical_device: vk::PhysicalDevice,
) -> anyhow::Result<()> {
    println!("1. Checking device extensions...");
    let supported = unsafe { is_portability_supported(backend, instance, physical_device) }
        .context("Could not enumerate device extensions")?;
    if !supported {
        println!("   Device does not advertise VK_EXTX_portability_subset");
        return Ok(());
    }
    println!("   ✓ VK_EXTX_portability_subset present");

    let queries = unsafe { PortabilityQueries::load(backend, instance) }
        .context("Could not resolve portability queries")?;

    println!("\n2. Querying portability features...");
    let features = unsafe { queries.features(physical_device) };
    println!("   triangleFans:           {}", features.triangle_fans);
    println!("   separateStencilMaskRef: {}", features.separate_stencil_mask_ref);
    println!("   events:                 {}", features.events);
    println!("   standardImageViews:     {}", features.standard_image_views);
    println!("   samplerMipLodBias:      {}", features.sampler_mip_lod_bias);

    println!("\n3. Querying portability properties...");
    let properties = unsafe { queries.properties(physical_device) };
    println!(
        "   minVertexInputBindingStrideAlignment: {}",
        properties.min_vertex_input_binding_stride_alignment
    );

    println!("\n4. Probing image view support...");
    let request = ImageViewRequest::default();
    println!(
        "   {:?} view of {:?}, swizzle {:?}",
        request.view_type, request.format, request.components
    );
    match unsafe { queries.image_view_support(physical_device, &request) } {
        Ok(()) => println!("   ✓ Supported"),
        Err(VkError::FormatNotSupported) => println!("   ✗ Not supported"),
        Err(e) => return Err(e).context("Image format query failed"),
    }

    Ok(())
}
