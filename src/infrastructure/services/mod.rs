mod light;
